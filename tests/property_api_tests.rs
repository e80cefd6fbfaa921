use std::collections::HashMap;

use checkbox_tree::api::{TreeEngineConfig, TreeLists, TreeStateEngine};
use checkbox_tree::core::{CheckModel, NodeFlag, NodeValue, RawNode};
use checkbox_tree::TreeError;
use proptest::prelude::*;
use proptest::sample::Index;

/// Per-node generator input: parent pick, "parent even without children",
/// declared disabled, label.
type NodeGen = (Option<Index>, bool, bool, String);

#[derive(Debug, Clone)]
struct GeneratedTree {
    roots: Vec<RawNode>,
    declared_disabled: HashMap<NodeValue, bool>,
}

fn build_tree(gens: Vec<NodeGen>) -> GeneratedTree {
    let count = gens.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut roots = Vec::new();
    for (i, (parent, ..)) in gens.iter().enumerate() {
        match parent {
            Some(pick) if i > 0 => children[pick.index(i)].push(i),
            _ => roots.push(i),
        }
    }

    fn build(i: usize, gens: &[NodeGen], children: &[Vec<usize>]) -> RawNode {
        let (_, force_parent, disabled, label) = &gens[i];
        let value = NodeValue::from(format!("n{i}"));
        let node = if children[i].is_empty() && !force_parent {
            RawNode::leaf(value, label.clone())
        } else {
            let kids = children[i]
                .iter()
                .map(|&child| build(child, gens, children))
                .collect();
            RawNode::parent(value, label.clone(), kids)
        };
        node.with_disabled(*disabled)
    }

    let declared_disabled = gens
        .iter()
        .enumerate()
        .map(|(i, node)| (NodeValue::from(format!("n{i}")), node.2))
        .collect();
    GeneratedTree {
        roots: roots
            .into_iter()
            .map(|root| build(root, &gens, &children))
            .collect(),
        declared_disabled,
    }
}

fn tree_strategy() -> impl Strategy<Value = GeneratedTree> {
    prop::collection::vec(
        (
            any::<Option<Index>>(),
            prop::bool::weighted(0.1),
            prop::bool::weighted(0.15),
            "[abc]{1,3}",
        ),
        1..40,
    )
    .prop_map(build_tree)
}

fn ancestors(engine: &TreeStateEngine, value: &NodeValue) -> Vec<NodeValue> {
    let mut chain = Vec::new();
    let mut current = engine.get_node(value).and_then(|node| node.parent.clone());
    while let Some(parent) = current {
        current = engine.get_node(&parent).and_then(|node| node.parent.clone());
        chain.push(parent);
    }
    chain
}

proptest! {
    #[test]
    fn repeated_value_anywhere_is_rejected(tree in tree_strategy(), pick in any::<Index>()) {
        let engine = TreeStateEngine::with_nodes(TreeEngineConfig::default(), &tree.roots)
            .expect("generated tree is unique");
        let values: Vec<NodeValue> = engine.values().cloned().collect();
        let repeated = values[pick.index(values.len())].clone();

        let mut roots = tree.roots.clone();
        roots.push(RawNode::leaf(repeated.clone(), "dup"));
        match TreeStateEngine::with_nodes(TreeEngineConfig::default(), &roots) {
            Err(TreeError::DuplicateValue { value }) => prop_assert_eq!(value, repeated),
            other => prop_assert!(false, "expected duplicate error, got {:?}", other.map(|e| e.len())),
        }
    }

    #[test]
    fn disabled_is_inherited_from_ancestors(tree in tree_strategy()) {
        let engine = TreeStateEngine::with_nodes(TreeEngineConfig::default(), &tree.roots)
            .expect("flatten");
        for node in engine.nodes() {
            let ancestor_declared = ancestors(&engine, &node.value)
                .iter()
                .any(|ancestor| tree.declared_disabled[ancestor]);
            let expected = tree.declared_disabled[&node.value] || ancestor_declared;
            prop_assert_eq!(node.disabled, expected, "node {}", node.value);
        }
    }

    #[test]
    fn all_model_parents_mirror_children_after_leaf_toggles(
        tree in tree_strategy(),
        toggles in prop::collection::vec((any::<Index>(), any::<bool>()), 1..30)
    ) {
        let mut engine = TreeStateEngine::with_nodes(
            TreeEngineConfig::new(CheckModel::All),
            &tree.roots,
        )
        .expect("flatten");
        engine.deserialize_lists(&TreeLists::default());
        let leaves: Vec<NodeValue> = engine
            .nodes()
            .filter(|node| node.is_leaf())
            .map(|node| node.value.clone())
            .collect();
        prop_assume!(!leaves.is_empty());

        for (pick, checked) in toggles {
            engine.toggle_checked(&leaves[pick.index(leaves.len())], checked);

            for node in engine.nodes().filter(|node| !node.children().is_empty()) {
                let every_child = node
                    .children()
                    .iter()
                    .all(|child| engine.flag(child, NodeFlag::Checked) == Some(true));
                prop_assert_eq!(node.is_checked(), every_child, "parent {}", node.value);
            }
        }
    }

    #[test]
    fn parent_model_toggles_never_touch_other_nodes(
        tree in tree_strategy(),
        pick in any::<Index>()
    ) {
        let mut engine = TreeStateEngine::with_nodes(
            TreeEngineConfig::new(CheckModel::Parent),
            &tree.roots,
        )
        .expect("flatten");
        let values: Vec<NodeValue> = engine.values().cloned().collect();
        let target = values[pick.index(values.len())].clone();
        let before = engine.snapshot();

        engine.toggle_checked(&target, true);
        for (old, new) in before.nodes.iter().zip(engine.nodes()) {
            if old.value != target {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn empty_filter_restores_visibility(tree in tree_strategy(), text in "[abc]{0,2}") {
        let mut engine = TreeStateEngine::with_nodes(TreeEngineConfig::default(), &tree.roots)
            .expect("flatten");
        engine.filter_nodes(&text);
        engine.filter_nodes("");
        prop_assert!(engine.nodes().all(|node| node.is_visible));
    }

    #[test]
    fn filter_shows_matches_their_ancestors_and_matched_subtrees(
        tree in tree_strategy(),
        text in "[abcABC]{1,2}"
    ) {
        let mut engine = TreeStateEngine::with_nodes(TreeEngineConfig::default(), &tree.roots)
            .expect("flatten");
        engine.filter_nodes(&text);

        let needle = text.to_lowercase();
        let matches = |value: &NodeValue| {
            engine
                .get_node(value)
                .is_some_and(|node| node.label.to_lowercase().contains(&needle))
        };

        for node in engine.nodes() {
            let chain = ancestors(&engine, &node.value);
            let has_matching_ancestor = chain.iter().any(|ancestor| matches(ancestor));
            let has_matching_descendant = engine
                .nodes()
                .filter(|other| matches(&other.value))
                .any(|other| ancestors(&engine, &other.value).contains(&node.value));
            let expected = matches(&node.value) || has_matching_ancestor || has_matching_descendant;
            prop_assert_eq!(node.is_visible, expected, "node {}", node.value);

            if matches(&node.value) && (node.is_leaf() || !chain.first().is_some_and(|p| matches(p))) {
                for ancestor in &chain {
                    prop_assert_eq!(engine.flag(ancestor, NodeFlag::Expanded), Some(true));
                }
            }
        }
    }

    #[test]
    fn lists_roundtrip_through_fresh_engine(
        tree in tree_strategy(),
        flags in prop::collection::vec((any::<Index>(), any::<bool>(), any::<bool>()), 0..30)
    ) {
        let config = TreeEngineConfig::new(CheckModel::Leaf);
        let mut engine = TreeStateEngine::with_nodes(config, &tree.roots).expect("flatten");
        let values: Vec<NodeValue> = engine.values().cloned().collect();
        for (pick, checked, expanded) in flags {
            let value = &values[pick.index(values.len())];
            engine.set_flag(value, NodeFlag::Checked, checked);
            engine.set_flag(value, NodeFlag::Expanded, expanded);
        }

        let lists = engine.serialize_lists();
        let mut reloaded = TreeStateEngine::with_nodes(config, &tree.roots).expect("reload");
        reloaded.deserialize_lists(&lists);
        prop_assert_eq!(reloaded.serialize_lists(), lists);
    }
}
