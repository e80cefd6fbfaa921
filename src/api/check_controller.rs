use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use crate::core::{CheckModel, FlatNode, NodeValue};

use super::TreeStateEngine;

impl TreeStateEngine {
    /// Sets the check state of `value` using the configured check model and
    /// cascade mode.
    pub fn toggle_checked(&mut self, value: &NodeValue, checked: bool) {
        let config = self.config;
        self.toggle_checked_with(value, checked, config.check_model, config.no_cascade);
    }

    /// Sets the check state of `value` and cascades it according to
    /// `check_model`.
    ///
    /// Leaves (and every node when `no_cascade` is set) are updated directly
    /// unless disabled. A non-leaf records its own state when the model tracks
    /// parents or when it has no children, then pushes the state down to its
    /// children when the model tracks leaves. Once the subtree has settled the
    /// ancestors are reconciled bottom-up via [`Self::toggle_parent_status`].
    /// Unknown values are ignored.
    pub fn toggle_checked_with(
        &mut self,
        value: &NodeValue,
        checked: bool,
        check_model: CheckModel,
        no_cascade: bool,
    ) {
        let Some(target) = self.nodes.get(value) else {
            debug!(%value, "toggle checked on unknown node");
            return;
        };
        if (target.is_leaf() || no_cascade) && target.disabled {
            trace!(%value, "toggle checked rejected for disabled node");
            return;
        }
        let parent = target.parent.clone();

        trace!(%value, checked, ?check_model, no_cascade, "toggle checked");
        self.cascade_checked(value, checked, check_model, no_cascade);

        if no_cascade || !check_model.tracks_parents() {
            return;
        }
        if let Some(parent) = parent {
            self.toggle_parent_status(&parent, check_model);
        }
    }

    /// Recomputes the check state of `value` and each of its ancestors from
    /// their direct children.
    ///
    /// Only [`CheckModel::All`] mutates state: a node becomes checked iff every
    /// direct child is checked. Other models walk to the root without writing.
    pub fn toggle_parent_status(&mut self, value: &NodeValue, check_model: CheckModel) {
        let mut current = Some(value.clone());
        while let Some(value) = current.take() {
            let Some(node) = self.nodes.get(&value) else {
                break;
            };
            current = node.parent.clone();

            if check_model == CheckModel::All {
                let every_child_checked = self.is_every_child_checked(&value);
                if let Some(node) = self.nodes.get_mut(&value) {
                    node.checked = Some(every_child_checked);
                }
            }
        }
    }

    /// Downward half of the toggle: pre-order over the subtree rooted at
    /// `root`, without any upward reconciliation.
    fn cascade_checked(
        &mut self,
        root: &NodeValue,
        checked: bool,
        check_model: CheckModel,
        no_cascade: bool,
    ) {
        let mut pending: SmallVec<[NodeValue; 16]> = smallvec![root.clone()];
        while let Some(value) = pending.pop() {
            let Some(node) = self.nodes.get_mut(&value) else {
                continue;
            };

            if node.is_leaf() || no_cascade {
                if !node.disabled {
                    node.checked = Some(checked);
                }
                continue;
            }

            if check_model.tracks_parents() || node.children().is_empty() {
                node.checked = Some(checked);
            }
            if check_model.tracks_leaves() {
                pending.extend(node.children().iter().rev().cloned());
            }
        }
    }

    fn is_every_child_checked(&self, value: &NodeValue) -> bool {
        self.nodes.get(value).is_some_and(|node| {
            node.children().iter().all(|child| {
                self.nodes
                    .get(child)
                    .is_some_and(FlatNode::is_checked)
            })
        })
    }
}
