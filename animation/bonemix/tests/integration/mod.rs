mod bone_lookup;
#[cfg(feature = "serde-support")]
mod serde_layout;
