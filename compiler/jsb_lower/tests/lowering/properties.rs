use proptest::prelude::*;

use jsb_ir::{visitor, DeclId, Parent};
use jsb_lower::{JsLoweringContext, BODILESS_BUILTIN_CLASSES, JS_PACKAGE};

use crate::common::Program;

#[derive(Clone, Debug)]
enum Shape {
    Class { members: usize },
    Function { params: usize },
    Property,
}

#[derive(Clone, Debug)]
struct TopLevel {
    shape: Shape,
    name: String,
    external: bool,
    intrinsic: bool,
    js_module: bool,
}

#[derive(Clone, Debug)]
struct FileSpec {
    package: &'static str,
    tagged: bool,
    decls: Vec<TopLevel>,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0usize..4).prop_map(|members| Shape::Class { members }),
        (0usize..3).prop_map(|params| Shape::Function { params }),
        Just(Shape::Property),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(BODILESS_BUILTIN_CLASSES.to_vec())
            .prop_map(|fq| fq.trim_start_matches("kotlin.").to_owned()),
        prop::sample::select(vec!["Widget", "foo", "bar", "jsTypeOf", "Int2"])
            .prop_map(str::to_owned),
    ]
}

fn top_level_strategy() -> impl Strategy<Value = TopLevel> {
    (
        shape_strategy(),
        name_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(shape, name, external, intrinsic, js_module)| TopLevel {
            shape,
            name,
            external,
            intrinsic,
            js_module,
        })
}

fn file_strategy() -> impl Strategy<Value = FileSpec> {
    (
        prop::sample::select(vec!["kotlin", JS_PACKAGE, "example"]),
        prop::bool::weighted(0.2),
        prop::collection::vec(top_level_strategy(), 0..8),
    )
        .prop_map(|(package, tagged, decls)| FileSpec {
            package,
            tagged,
            decls,
        })
}

/// Build every file; nested declarations share their top-level flag so the
/// input is always consistent.
fn build(p: &mut Program, specs: &[FileSpec]) -> Vec<(jsb_ir::FileId, Vec<DeclId>)> {
    let mut files = Vec::new();
    for (index, spec) in specs.iter().enumerate() {
        let file = p.file(&format!("f{index}.kt"), spec.package);
        if spec.tagged {
            p.file_js_module(file, "lib");
        }
        let mut tops = Vec::new();
        for decl in &spec.decls {
            let parent = Parent::File(file);
            let top = match decl.shape {
                Shape::Class { members } => {
                    let class = p.class(parent, &decl.name);
                    for m in 0..members {
                        let member = p.function(Parent::Decl(class), &format!("m{m}"));
                        p.arena.set_external(member, decl.external);
                    }
                    class
                }
                Shape::Function { params } => {
                    let fun = p.function(parent, &decl.name);
                    for i in 0..params {
                        let name = p.interner.intern(&format!("p{i}"));
                        p.arena.add_value_parameter(fun, name);
                    }
                    fun
                }
                Shape::Property => p.property(parent, &decl.name, decl.external)[0],
            };
            p.arena.set_external(top, decl.external);
            if decl.intrinsic {
                p.intrinsic(top);
            }
            if decl.js_module {
                p.js_module(top, "mod");
            }
            tops.push(top);
        }
        files.push((file, tops));
    }
    files
}

fn subtree_size(p: &Program, decl: DeclId) -> usize {
    1 + visitor::children(&p.arena, decl)
        .into_iter()
        .map(|child| subtree_size(p, child))
        .sum::<usize>()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Every top-level declaration ends up in exactly one of: its file, its
    /// file's external container, the builtins container.
    #[test]
    fn prop_partition_is_complete(specs in prop::collection::vec(file_strategy(), 1..4)) {
        let mut p = Program::new();
        let files = build(&mut p, &specs);

        let mut ctx = JsLoweringContext::new();
        prop_assert!(p.lower(&mut ctx).is_ok());

        for (file, tops) in &files {
            let container = ctx.external_container(*file);
            let builtins = ctx.builtins_container();
            for decl in tops {
                let homes = [Some(*file), container, builtins]
                    .into_iter()
                    .flatten()
                    .filter(|home| p.top_level(*home).contains(decl))
                    .count();
                prop_assert_eq!(homes, 1, "{:?} found in {} places", decl, homes);
            }
        }
    }

    /// The index holds each moved subtree exactly once and nothing else.
    #[test]
    fn prop_index_matches_moved_subtrees(specs in prop::collection::vec(file_strategy(), 1..4)) {
        let mut p = Program::new();
        let files = build(&mut p, &specs);

        let mut ctx = JsLoweringContext::new();
        prop_assert!(p.lower(&mut ctx).is_ok());

        let mut expected = 0;
        for (file, tops) in &files {
            for &decl in tops {
                let moved = !p.top_level(*file).contains(&decl);
                prop_assert_eq!(ctx.is_external_declaration(decl), moved);
                if moved {
                    expected += subtree_size(&p, decl);
                }
            }
        }
        prop_assert_eq!(ctx.external_declarations().len(), expected);
    }

    /// Declarations in a tagged file always leave it.
    #[test]
    fn prop_tagged_files_are_emptied(spec in file_strategy()) {
        let mut p = Program::new();
        let spec = FileSpec { tagged: true, ..spec };
        let files = build(&mut p, std::slice::from_ref(&spec));

        let mut ctx = JsLoweringContext::new();
        prop_assert!(p.lower(&mut ctx).is_ok());

        let (file, tops) = &files[0];
        prop_assert!(p.top_level(*file).is_empty());
        if !tops.is_empty() {
            let container = ctx.external_container(*file).unwrap();
            prop_assert_eq!(p.top_level(container), tops.as_slice());
        }
    }
}
