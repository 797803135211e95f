use thiserror::Error;

/// Error types for building and pairing animation data
///
/// These are raised when data is assembled, never during evaluation.
/// Evaluation reports problems through an [`ErrorSink`](crate::ErrorSink).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BonemixError {
    /// A keyframe channel was built with no keyframes
    #[error("Channel has no keyframes")]
    EmptyChannel,

    /// Keyframe times decrease somewhere in the channel
    #[error("Channel keyframes out of order at index {index}")]
    UnsortedChannel { index: usize },

    /// Animated bones must be sorted ascending and unique by id
    #[error("Animated bone {id} at index {index} breaks ascending id order")]
    UnsortedAnimatedBones { index: usize, id: u32 },

    /// `bone_ids` and `bone_offsets` differ in length
    #[error("Model data mismatch: {ids} bone ids but {offsets} bone offsets")]
    MismatchedModelData { ids: usize, offsets: usize },

    /// A bone referenced by the model has no static record in the animation
    #[error("Bone {0} is missing from the animation")]
    MissingBone(u32),

    /// A static record does not sit at the position named by its id
    #[error("Static bone at index {index} has id {id}")]
    StaticBoneIdMismatch { index: usize, id: u32 },

    /// A static record names a parent that does not exist
    #[error("Bone {id} names unknown parent {parent_id}")]
    UnknownParent { id: u32, parent_id: u32 },
}

/// Result type using BonemixError
pub type Result<T> = std::result::Result<T, BonemixError>;
