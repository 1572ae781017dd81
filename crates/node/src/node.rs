//! The node descriptor.

use helium_credential::CredentialDescription;

use crate::registry::OperationRegistry;

/// Static description of the Helium Network node as the host sees it:
/// identity, UI grouping, required credential, and the operation
/// registry behind the resource/operation selectors.
#[derive(Debug)]
pub struct NodeDescriptor {
    key: &'static str,
    name: &'static str,
    version: u32,
    group: &'static [&'static str],
    description: &'static str,
    credential: CredentialDescription,
    registry: OperationRegistry,
}

impl NodeDescriptor {
    /// Build the descriptor for the Helium Network node.
    #[must_use]
    pub fn helium_network() -> Self {
        Self {
            key: "heliumnetwork",
            name: "Helium Network",
            version: 1,
            group: &["transform"],
            description: "Interact with the Helium Network API",
            credential: CredentialDescription::helium_network_api(),
            registry: OperationRegistry::new(),
        }
    }

    /// The key the host registers this node type under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Human-readable display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Node version (1-based).
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// UI group hierarchy.
    #[must_use]
    pub fn group(&self) -> &'static [&'static str] {
        self.group
    }

    /// Short description shown in the editor.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The credential this node requires.
    #[must_use]
    pub fn credential(&self) -> &CredentialDescription {
        &self.credential
    }

    /// The operation registry behind the node's selectors.
    #[must_use]
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}

impl Default for NodeDescriptor {
    fn default() -> Self {
        Self::helium_network()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;

    #[test]
    fn descriptor_identity() {
        let node = NodeDescriptor::helium_network();
        assert_eq!(node.key(), "heliumnetwork");
        assert_eq!(node.name(), "Helium Network");
        assert_eq!(node.version(), 1);
        assert_eq!(node.group(), &["transform"]);
    }

    #[test]
    fn descriptor_requires_helium_credential() {
        let node = NodeDescriptor::helium_network();
        assert_eq!(node.credential().key, "heliumNetworkApi");
        assert!(node.credential().required);
    }

    #[test]
    fn descriptor_exposes_all_resources() {
        let node = NodeDescriptor::helium_network();
        for resource in Resource::ALL {
            assert!(
                !node.registry().operations_for(resource).is_empty(),
                "{} has no operations",
                resource.key()
            );
        }
    }
}
