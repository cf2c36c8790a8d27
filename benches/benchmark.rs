//! Benchmarks for the import heuristics. These run once per asset import so
//! they are not critical, but a large rig or a LOD export with many meshes
//! shouldn't make re-importing noticeably slower.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rigprep::{
    classifier, lod,
    retarget::{self, tables::HUMANOID_G3},
    skeleton::Skeleton,
    types::{LocalTransform, RendererDescriptor, RigGeneration},
};

/// A G3 style skeleton with every mapped bone as a chain below the bone
/// root, which puts the classifying signals deep in the tree
fn deep_skeleton() -> Skeleton {
    let mut s = Skeleton::new("Character");
    let mut parent = s
        .add_node(0, "RL_BoneRoot", LocalTransform::default())
        .unwrap_or(0);
    for b in HUMANOID_G3.iter().filter(|b| b.source != "CC_Base_L_Pinky3") {
        parent = s
            .add_node(parent, b.source, LocalTransform::default())
            .unwrap_or(parent);
    }
    s
}

fn lod_renderers() -> Vec<RendererDescriptor> {
    (0..8)
        .flat_map(|level| {
            ["Body", "Eyes", "Hair", "Teeth", "Tongue", "Shirt"]
                .iter()
                .map(move |n| {
                    if level == 0 {
                        RendererDescriptor::new(n)
                    } else {
                        RendererDescriptor::new(&format!("{n}_LOD{level}"))
                    }
                })
        })
        .collect()
}

fn classify_skeleton(c: &mut Criterion) {
    let s = black_box(deep_skeleton());
    c.bench_function(
        "classify_skeleton", //
        |b| b.iter(|| classifier::classify(None, Some(&s), None)),
    );
}

fn classify_key(c: &mut Criterion) {
    let s = black_box(deep_skeleton());
    c.bench_function(
        "classify_key", //
        |b| b.iter(|| classifier::classify(Some("ActorScan"), Some(&s), None)),
    );
}

fn build_mapping(c: &mut Criterion) {
    let s = black_box(deep_skeleton());
    c.bench_function(
        "build_mapping", //
        |b| b.iter(|| retarget::build_mapping(RigGeneration::G3, &s)),
    );
}

fn group_lods(c: &mut Criterion) {
    let renderers = black_box(lod_renderers());
    c.bench_function(
        "group_lods", //
        |b| b.iter(|| lod::group_lods(&renderers)),
    );
}

criterion_group!(
    benches,
    classify_skeleton,
    classify_key,
    build_mapping,
    group_lods
);
criterion_main!(benches);
