use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let output_file = PathBuf::from(&crate_dir).join("include").join("bonemix.h");

    if let Some(dir) = output_file.parent() {
        std::fs::create_dir_all(dir).expect("create include directory");
    }

    // Written by hand; keep in sync with the #[repr(C)] types in src/lib.rs
    let header_content = r#"#ifndef BONEMIX_H
#define BONEMIX_H

#ifdef __cplusplus
extern "C" {
#endif

#include <stdint.h>
#include <stdbool.h>

/* Error kinds passed to the error callback */
#define BONEMIX_ERR_NULL_INPUT 0
#define BONEMIX_ERR_DIAGNOSTIC 1
#define BONEMIX_ERR_NOT_FOUND 2

/* Source contexts passed to the error callback */
#define BONEMIX_CTX_EVALUATE_SINGLE 1
#define BONEMIX_CTX_EVALUATE_BLENDED 2
#define BONEMIX_CTX_RESOLVE_WORLD 3
#define BONEMIX_CTX_SAMPLE_BONE 4
#define BONEMIX_CTX_FFI 5

typedef struct { float x, y, z; } Vec3;
typedef struct { float x, y, z, w; } Quat;
/* Column-major, translation in m[12..15] */
typedef struct { float m[16]; } Mat4;

typedef struct { float time; Vec3 pos; } PositionKeyframe;
typedef struct { float time; Quat rot; } RotationKeyframe;
typedef struct { float time; Vec3 scl; } ScalingKeyframe;

typedef struct {
    uint32_t ID;
    uint32_t nPositionKeyframes;
    const PositionKeyframe* positionChannel;
    uint32_t nRotationKeyframes;
    const RotationKeyframe* rotationChannel;
    uint32_t nScalingKeyframes;
    const ScalingKeyframe* scalingChannel;
} AnimatedBone;

typedef struct {
    uint32_t numBones;
    const uint32_t* boneIDs;
    const Mat4* boneOffsets;
} ModelData;

typedef struct {
    uint32_t ID;
    uint32_t parentID;
    Mat4 transform;
} StaticBone;

typedef struct {
    float duration;
    uint32_t numStaticBones;
    const StaticBone* staticBones;
    uint32_t numAnimatedBones;
    const AnimatedBone* animatedBones;
} Animation;

typedef void (*BONEMIX_ERROR_CALLBACK)(uint32_t kind, uint32_t source_context, uint32_t subject_id);

/* Error reporting */
void bonemix_set_error_callback(BONEMIX_ERROR_CALLBACK callback);
bool bonemix_get_last_error(uint32_t* kind, uint32_t* source_context, uint32_t* subject_id);
void bonemix_clear_last_error(void);

/* Evaluation: rslBuffer must hold model->numBones matrices */
void getSingleAnimation(Mat4* rslBuffer, const Animation* animation, const ModelData* model, float animationTime);
void getBlendedAnimation(Mat4* rslBuffer, const Animation* a1, const Animation* a2, const ModelData* model, float t1, float t2, float blendFactor);

#ifdef __cplusplus
}
#endif

#endif /* BONEMIX_H */
"#;

    std::fs::write(&output_file, header_content).expect("write bonemix.h");

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
