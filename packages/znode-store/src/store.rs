//! The znode backend: path materialization plus the four flat operations.

use std::collections::HashMap;
use std::sync::Arc;

use trellis_backend::{Backend, Entry, Error};
use trellis_tree_store::{Acl, ClientConfig, CreateMode, TreeError, TreeStore, Version};

use crate::ZnodeConfig;

/// A [`Backend`] that stores flat keys as leaves of a znode tree.
///
/// Keys are embedded under the configured root (`/root/key`), and every
/// ancestor segment is materialized on demand before the leaf operation
/// runs. The backend holds no state beyond the immutable root and the
/// shared client, so one instance serves concurrent callers directly.
///
/// Ancestor nodes created by materialization are never cleaned up, even
/// after every leaf beneath them is deleted.
pub struct ZnodeBackend {
    root: String,
    client: Arc<dyn TreeStore>,
}

impl ZnodeBackend {
    /// Construct a backend over an already-connected client.
    pub fn new(config: ZnodeConfig, client: Arc<dyn TreeStore>) -> Self {
        Self {
            root: config.root,
            client,
        }
    }

    /// Construct a backend from a raw configuration map, dialing the
    /// client through `connect`.
    ///
    /// A connection failure is fatal and surfaces to the caller of setup;
    /// nothing is retried here.
    pub fn from_conf<F>(conf: &HashMap<String, String>, connect: F) -> Result<Self, Error>
    where
        F: FnOnce(&ClientConfig) -> Result<Arc<dyn TreeStore>, TreeError>,
    {
        let config = ZnodeConfig::from_map(conf);
        let client = connect(&config.client).map_err(|err| Error::Config {
            message: format!("client setup failed: {}", err),
        })?;
        Ok(Self::new(config, client))
    }

    /// The normalized root path this backend stores under.
    pub fn root(&self) -> &str {
        &self.root
    }

    fn full_path(&self, key: &str) -> String {
        format!("{}{}", self.root, key)
    }

    /// Materialize every segment of `path` as a node, root to leaf.
    ///
    /// Best-effort by design: failures here are logged and swallowed, and
    /// the leaf operation that follows is the one whose error surfaces.
    /// A concurrent writer creating the same segment is not a failure -
    /// the segment existing is all that matters.
    fn ensure_path(&self, path: &str) {
        let mut node_path = String::with_capacity(path.len());
        for segment in path.split('/') {
            if segment.trim().is_empty() {
                continue;
            }
            node_path.push('/');
            node_path.push_str(segment);

            let present = match self.client.exists(&node_path) {
                Ok(present) => present,
                Err(err) => {
                    log::debug!("existence check for {} failed: {}", node_path, err);
                    false
                }
            };
            if !present {
                // AlreadyExists means we lost a creation race, which is fine.
                if let Err(err) =
                    self.client
                        .create(&node_path, None, CreateMode::Persistent, Acl::OPEN)
                {
                    log::debug!("create for {} failed: {}", node_path, err);
                }
            }
        }
    }
}

impl Backend for ZnodeBackend {
    fn put(&self, entry: &Entry) -> Result<(), Error> {
        let full_path = self.full_path(&entry.key);
        self.ensure_path(&full_path);

        self.client
            .set(&full_path, entry.value.clone(), Version::Any)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Entry>, Error> {
        let full_path = self.full_path(key);
        self.ensure_path(&full_path);

        // Null content means the key was never assigned a value; a
        // zero-length value is still a value.
        match self.client.get(&full_path)? {
            Some(value) => Ok(Some(Entry::new(key, value))),
            None => Ok(None),
        }
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        let full_path = self.full_path(key);

        if self.client.exists(&full_path)? {
            self.client.delete(&full_path, Version::Any)?;
        }
        // Missing node: the delete is an idempotent no-op. Ancestors stay.
        Ok(())
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, Error> {
        let mut full_path = self.full_path(prefix);
        if full_path.ends_with('/') {
            full_path.pop();
        }
        self.ensure_path(&full_path);

        let names = match self.client.children(&full_path) {
            Ok(names) => names,
            Err(err) => {
                log::debug!("child enumeration for {} failed: {}", full_path, err);
                Vec::new()
            }
        };

        let mut children = Vec::new();
        for name in names {
            let child_path = format!("{}/{}", full_path, name);

            let has_content = match self.client.get(&child_path) {
                Ok(content) => content.is_some(),
                Err(err) => {
                    log::debug!("content probe for {} failed: {}", child_path, err);
                    false
                }
            };
            let has_children = match self.client.children(&child_path) {
                Ok(sub) => !sub.is_empty(),
                Err(err) => {
                    log::debug!("child enumeration for {} failed: {}", child_path, err);
                    false
                }
            };

            if has_content {
                children.push(name.clone());
            }
            if has_children {
                children.push(format!("{}/", name));
            }
        }

        children.sort();
        Ok(children)
    }
}
