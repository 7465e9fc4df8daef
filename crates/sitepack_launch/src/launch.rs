use sitepack_common::MOUNT_NODE_ID;

use crate::flags::{FlagShape, Flags};

/// The document the application starts inside. Lookup may miss; that is the
/// caller's collaborator contract to handle, not ours.
pub trait Document {
  type Node;

  fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}

/// The external UI framework's mount contract.
pub trait AppFramework<Node> {
  type Handle;

  fn init(&self, node: Option<Node>, flags: Flags) -> Self::Handle;
}

/// Mounts the application: one lookup of the mount node, one `init` call.
///
/// No existence check on the node. A missing mount element is passed through
/// as `None` and whatever the framework does with it is the outcome.
pub fn launch<D, F>(secret: impl Into<String>, shape: FlagShape, document: &D, framework: &F) -> F::Handle
where
  D: Document,
  F: AppFramework<D::Node>,
{
  let node = document.element_by_id(MOUNT_NODE_ID);
  framework.init(node, Flags::from_secret(secret.into(), shape))
}
