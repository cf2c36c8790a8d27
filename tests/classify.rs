//! Generation classification against hand built skeletons

use log::info;
use rigprep::{
    classifier::{self, GENERATION_KEYS},
    skeleton::Skeleton,
    types::{LocalTransform, RendererDescriptor, RigGeneration},
};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes logging in a "once per test run" manner. Call at the start of
/// each test that needs logging.
fn init_tests() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

/// Builds a skeleton from `(parent, name)` pairs. Parents must be listed
/// before their children, index 0 is the root.
fn skeleton(nodes: &[(usize, &str)]) -> Skeleton {
    let mut s = Skeleton::new("Character");
    for (parent, name) in nodes {
        s.add_node(*parent, name, LocalTransform::default()).unwrap();
    }
    s
}

#[test]
fn key_table_wins() {
    init_tests();
    let s = skeleton(&[(0, "RootNode_0_"), (1, "CC_Base_L_Pinky3")]);
    let renderers =
        [RendererDescriptor::new("CC_Game_Body").with_material("Skin_Body")];
    for &(key, generation) in GENERATION_KEYS {
        info!("key {:?}", key);
        assert_eq!(
            classifier::classify(Some(key), Some(&s), Some(&renderers[..])),
            generation
        );
        assert_eq!(classifier::classify(Some(key), None, None), generation);
    }
}

#[test]
fn unknown_key() {
    init_tests();
    let s = skeleton(&[(0, "RootNode_0_")]);
    // A key that is not in the table is still a key, the scene is not used
    assert_eq!(
        classifier::classify(Some("RL_Something_New"), Some(&s), None),
        RigGeneration::Unknown
    );
    // Keys are case sensitive
    assert_eq!(
        classifier::classify(Some("actorbuild"), None, None),
        RigGeneration::Unknown
    );
    // An empty key is the same as no key
    assert_eq!(
        classifier::classify(Some(""), Some(&s), None),
        RigGeneration::ActorCore
    );
}

#[test]
fn nothing_to_scan() {
    init_tests();
    assert_eq!(
        classifier::classify(None, None, None),
        RigGeneration::Unknown
    );
}

#[test]
fn first_rule_wins() {
    init_tests();
    let s = skeleton(&[(0, "RootNode_0_"), (1, "CC_Base_L_Pinky3")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::ActorCore
    );

    // Both signals on one node, the first rule in the list decides
    let s = skeleton(&[(0, "RootNode_0_CC_Base_L_Pinky3")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::ActorCore
    );

    // Pre-order: the earlier node decides even for a later rule
    let s = skeleton(&[(0, "CC_Base_L_Finger42"), (0, "CC_Base_L_Pinky3")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::G1
    );
}

#[test]
fn bone_names() {
    init_tests();
    let cases = [
        ("CC_Base_L_Pinky3", RigGeneration::G3),
        ("cc_base_l_pinky3", RigGeneration::G3),
        ("pinky_03_l", RigGeneration::GameBase),
        ("CC_Base_L_Finger42", RigGeneration::G1),
        ("Armature", RigGeneration::Unknown),
    ];
    for (name, generation) in cases {
        let s = skeleton(&[(0, "Root"), (1, name)]);
        assert_eq!(classifier::classify(None, Some(&s), None), generation);
    }
}

#[test]
fn bone_root_needs_hip() {
    init_tests();
    let s = skeleton(&[(0, "RL_BoneRoot"), (1, "CC_Base_Hip")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::G3
    );

    let s = skeleton(&[(0, "RL_BoneRoot"), (1, "Hip")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::Unknown
    );

    // The hip must be a direct child
    let s = skeleton(&[(0, "RL_BoneRoot"), (1, "Pelvis"), (2, "CC_Base_Hip")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::Unknown
    );
}

#[test]
fn mesh_and_material() {
    init_tests();
    let s = skeleton(&[(0, "Armature"), (0, "CC_Game_Tongue")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::GameBase
    );

    let s = skeleton(&[(0, "Armature"), (0, "CC_Base_Body")]);
    let body = |material: &str| {
        [RendererDescriptor::new("CC_Base_Body")
            .with_material("Std_Eyelash")
            .with_material(material)]
    };
    assert_eq!(
        classifier::classify(None, Some(&s), Some(&body("Skin_Body")[..])),
        RigGeneration::G1
    );
    // Contains "Skin_Body" as well, so the G1 rule claims it first
    assert_eq!(
        classifier::classify(None, Some(&s), Some(&body("Std_Skin_Body")[..])),
        RigGeneration::G1
    );
    assert_eq!(
        classifier::classify(None, Some(&s), Some(&body("Cloth")[..])),
        RigGeneration::Unknown
    );
    // No renderer attached to the body node
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::Unknown
    );
}

#[test]
fn bones_before_meshes() {
    init_tests();
    // The mesh rule's node comes first in pre-order but pass one still wins
    let s = skeleton(&[(0, "CC_Game_Body"), (0, "CC_Base_L_Finger42")]);
    assert_eq!(
        classifier::classify(None, Some(&s), None),
        RigGeneration::G1
    );
}
