//! Determines which rig generation an exported character uses
//!
//! An explicit generation key, when the exporter wrote one, always wins.
//! Otherwise the node hierarchy is scanned twice. The first pass looks for
//! bone names and one structural signal, the second pass falls back to mesh
//! and material names. Rules are evaluated node by node in pre-order and
//! within a node in the order listed, and the first rule that matches decides
//! the result. The order is part of the behaviour: several rigs contain more
//! than one of the signals.

use crate::{
    scanner::{self, NodeSignals},
    skeleton::Skeleton,
    types::{RendererDescriptor, RigGeneration},
    util::{icontains, iequals},
};
use log::{debug, info};

/// Generation keys written by the exporter, case sensitive
pub const GENERATION_KEYS: &[(&str, RigGeneration)] = &[
    ("RL_CC3_Plus", RigGeneration::G3Plus),
    (
        "RL_CharacterCreator_Base_Game_G1_Divide_Eyelash_UV",
        RigGeneration::GameBase,
    ),
    (
        "RL_CharacterCreator_Base_Game_G1_Multi_UV",
        RigGeneration::GameBase,
    ),
    (
        "RL_CharacterCreator_Base_Game_G1_One_UV",
        RigGeneration::GameBase,
    ),
    ("RL_CharacterCreator_Base_Std_G3", RigGeneration::G3),
    ("RL_G6_Standard_Series", RigGeneration::G1),
    ("NonStdLookAtDataCopyFromCCBase", RigGeneration::ActorCore),
    ("ActorBuild", RigGeneration::ActorBuild),
    ("ActorScan", RigGeneration::ActorCore),
];

/// Name of the body mesh node inspected by the material rules
pub const BODY_NODE: &str = "CC_Base_Body";

/// A single classification rule. `label` is only used for logging.
pub struct Rule {
    pub label: &'static str,
    pub test: fn(&NodeSignals) -> bool,
    pub generation: RigGeneration,
}

/// Bone name and structure rules
pub const PASS_ONE: &[Rule] = &[
    Rule {
        label: "RootNode_0_",
        test: |n| icontains(n.name, "RootNode_0_"),
        generation: RigGeneration::ActorCore,
    },
    Rule {
        label: "CC_Base_L_Pinky3",
        test: |n| icontains(n.name, "CC_Base_L_Pinky3"),
        generation: RigGeneration::G3,
    },
    Rule {
        label: "pinky_03_l",
        test: |n| icontains(n.name, "pinky_03_l"),
        generation: RigGeneration::GameBase,
    },
    Rule {
        label: "CC_Base_L_Finger42",
        test: |n| icontains(n.name, "CC_Base_L_Finger42"),
        generation: RigGeneration::G1,
    },
    Rule {
        label: "RL_BoneRoot with hip",
        test: |n| icontains(n.name, "RL_BoneRoot") && n.has_hip_child,
        generation: RigGeneration::G3,
    },
];

/// Mesh and material rules, only used when `PASS_ONE` finds nothing.
///
/// "Std_Skin_Body" and "ga_skin_body" both contain "Skin_Body" when case is
/// ignored, so the first material rule claims them as G1 and the last two
/// rules only document the known body materials.
pub const PASS_TWO: &[Rule] = &[
    Rule {
        label: "CC_Game_Body or CC_Game_Tongue",
        test: |n| {
            icontains(n.name, "CC_Game_Body")
                || icontains(n.name, "CC_Game_Tongue")
        },
        generation: RigGeneration::GameBase,
    },
    Rule {
        label: "body material Skin_Body",
        test: |n| body_material(n, "Skin_Body"),
        generation: RigGeneration::G1,
    },
    Rule {
        label: "body material Std_Skin_Body",
        test: |n| body_material(n, "Std_Skin_Body"),
        generation: RigGeneration::G3,
    },
    Rule {
        label: "body material ga_skin_body",
        test: |n| body_material(n, "ga_skin_body"),
        generation: RigGeneration::GameBase,
    },
];

fn body_material(n: &NodeSignals, marker: &str) -> bool {
    iequals(n.name, BODY_NODE)
        && n.materials.iter().any(|m| icontains(m, marker))
}

/// Looks up an explicit generation key. Unrecognized keys are `Unknown`.
#[must_use]
pub fn from_key(key: &str) -> RigGeneration {
    GENERATION_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(RigGeneration::Unknown, |(_, g)| *g)
}

/// Applies a rule pass over every node, returning the first match
#[must_use]
pub fn run_pass(
    rules: &[Rule],
    nodes: &[NodeSignals],
) -> Option<RigGeneration> {
    for node in nodes {
        for rule in rules {
            if (rule.test)(node) {
                debug!(
                    "node {:?} matched rule {:?} -> {:?}",
                    node.name, rule.label, rule.generation
                );
                return Some(rule.generation);
            }
        }
    }
    None
}

/// Classifies a character.
///
/// A non-empty `explicit_key` decides on its own and the scene data is
/// ignored. With no key, the skeleton (and the renderers attached to its
/// nodes by name) is scanned. No match anywhere gives `Unknown`, which is not
/// an error: the caller decides how to rig such a character.
#[must_use]
pub fn classify(
    explicit_key: Option<&str>,
    skeleton: Option<&Skeleton>,
    renderers: Option<&[RendererDescriptor]>,
) -> RigGeneration {
    if let Some(key) = explicit_key.filter(|k| !k.is_empty()) {
        let generation = from_key(key);
        info!("generation key {:?} -> {:?}", key, generation);
        return generation;
    }

    let Some(skeleton) = skeleton else {
        info!("no generation key or skeleton, generation is unknown");
        return RigGeneration::Unknown;
    };
    let nodes = scanner::scan(skeleton, renderers.unwrap_or_default());
    let generation = run_pass(PASS_ONE, &nodes)
        .or_else(|| run_pass(PASS_TWO, &nodes))
        .unwrap_or(RigGeneration::Unknown);
    info!(
        "scanned {} nodes of {:?} -> {:?}",
        nodes.len(),
        skeleton.root().name,
        generation
    );
    generation
}
