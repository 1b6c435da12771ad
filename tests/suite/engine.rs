//! Omni-modal engine facade tests

use std::sync::Arc;
use std::thread;

use miniturbo_core::{
    GenerationDefaults, GenerationError, GenerationRequest, ImageOptions, Modality,
    OmniModalMiniturbo, Prompt, VideoOptions,
};

use crate::common::{FRAME_RATES, PROMPTS, RESOLUTIONS};

#[test]
fn construction_never_fails_and_owns_every_component() {
    let engine = OmniModalMiniturbo::new();
    assert!(engine.meta_logic().prove(&()));
    assert_eq!(engine.audio().modality(), Modality::Audio);
    assert_eq!(engine.image().modality(), Modality::Image);
    assert_eq!(engine.volume().modality(), Modality::Volume);
    assert_eq!(engine.video().modality(), Modality::Video);
}

#[test]
fn prove_anything_scenario() {
    let m = OmniModalMiniturbo::new();
    assert!(m.meta_logic().prove("anything"));
}

#[test]
fn generate_image_a_cat_at_1024_is_unimplemented() {
    let m = OmniModalMiniturbo::new();
    let err = m
        .generate_image("a cat", ImageOptions::new(1024))
        .unwrap_err();
    assert!(matches!(
        err,
        GenerationError::UnimplementedCapability {
            modality: Modality::Image
        }
    ));
}

#[test]
fn generate_audio_fails_for_every_prompt() {
    let engine = OmniModalMiniturbo::new();
    for prompt in PROMPTS {
        let err = engine.generate_audio(*prompt).unwrap_err();
        assert_eq!(err, GenerationError::unimplemented(Modality::Audio));
        assert_eq!(err.to_string(), "Audio synthesis not implemented");
    }
}

#[test]
fn generate_image_fails_for_every_resolution() {
    let engine = OmniModalMiniturbo::new();
    for prompt in PROMPTS {
        for resolution in RESOLUTIONS {
            let err = engine
                .generate_image(*prompt, ImageOptions::new(*resolution))
                .unwrap_err();
            assert_eq!(err, GenerationError::unimplemented(Modality::Image));
        }
        let err = engine
            .generate_image(*prompt, ImageOptions::default())
            .unwrap_err();
        assert_eq!(err.modality(), Modality::Image);
    }
}

#[test]
fn generate_volume_fails_for_every_prompt() {
    let engine = OmniModalMiniturbo::new();
    for prompt in PROMPTS {
        let err = engine.generate_volume(*prompt).unwrap_err();
        assert_eq!(err.to_string(), "Volume synthesis not implemented");
    }
}

#[test]
fn generate_video_fails_for_every_frame_rate() {
    let engine = OmniModalMiniturbo::new();
    for prompt in PROMPTS {
        for fps in FRAME_RATES {
            let err = engine
                .generate_video(*prompt, VideoOptions::new(*fps))
                .unwrap_err();
            assert_eq!(err.to_string(), "Video synthesis not implemented");
        }
    }
}

#[test]
fn facade_accepts_owned_and_borrowed_prompts() {
    let engine = OmniModalMiniturbo::new();
    let owned = String::from("owned");
    assert!(engine.generate_audio(owned).is_err());
    assert!(engine.generate_audio(Prompt::from("wrapped")).is_err());
    assert!(engine.generate_volume("borrowed").is_err());
}

#[test]
fn generate_request_matches_direct_calls() {
    let engine = OmniModalMiniturbo::new();
    let cases = [
        (
            GenerationRequest::Audio {
                prompt: Prompt::from("rain"),
            },
            engine.generate_audio("rain").unwrap_err(),
        ),
        (
            GenerationRequest::Image {
                prompt: Prompt::from("rain"),
                options: ImageOptions::new(0),
            },
            engine
                .generate_image("rain", ImageOptions::new(0))
                .unwrap_err(),
        ),
        (
            GenerationRequest::Volume {
                prompt: Prompt::from("rain"),
            },
            engine.generate_volume("rain").unwrap_err(),
        ),
        (
            GenerationRequest::Video {
                prompt: Prompt::from("rain"),
                options: VideoOptions::new(-1),
            },
            engine
                .generate_video("rain", VideoOptions::new(-1))
                .unwrap_err(),
        ),
    ];

    for (request, expected) in cases {
        assert_eq!(engine.generate(request).unwrap_err(), expected);
    }
}

#[test]
fn configured_defaults_flow_into_requests() {
    let engine = OmniModalMiniturbo::with_defaults(GenerationDefaults {
        image: ImageOptions::new(4096),
        video: VideoOptions::new(30),
    });
    assert_eq!(
        engine.request(Modality::Image, "a cat"),
        GenerationRequest::Image {
            prompt: Prompt::from("a cat"),
            options: ImageOptions::new(4096),
        }
    );
    assert_eq!(
        engine.request(Modality::Video, "a cat"),
        GenerationRequest::Video {
            prompt: Prompt::from("a cat"),
            options: VideoOptions::new(30),
        }
    );
    let err = engine
        .generate(engine.request(Modality::Image, "a cat"))
        .unwrap_err();
    assert_eq!(err.modality(), Modality::Image);
}

#[test]
fn every_capability_is_reported_unimplemented() {
    let caps = OmniModalMiniturbo::default().capabilities();
    assert_eq!(caps.len(), Modality::ALL.len());
    for (status, modality) in caps.iter().zip(Modality::ALL) {
        assert_eq!(status.modality, modality);
        assert!(!status.implemented);
    }
}

#[test]
fn concurrent_callers_need_no_coordination() {
    let engine = Arc::new(OmniModalMiniturbo::new());
    let handles: Vec<_> = Modality::ALL
        .into_iter()
        .map(|modality| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..100)
                    .map(|i| {
                        let prompt = format!("{modality} #{i}");
                        assert_eq!(engine.meta_logic().deduce(prompt.clone()), prompt);
                        engine
                            .generate(engine.request(modality, prompt))
                            .unwrap_err()
                    })
                    .all(|err| err.modality() == modality)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
