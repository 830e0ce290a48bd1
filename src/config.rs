use std::sync::Arc;

/// Configuration of a deque
#[derive(Clone, Debug, Default)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn new(placeholder: i32) -> Self {
        let inner = ConfigInner { placeholder };
        Self(Arc::new(inner))
    }
}

impl std::ops::Deref for Config {
    type Target = ConfigInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub struct ConfigInner {
    /// Value carried by an invalid `DequeItem`
    pub placeholder: i32,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self { placeholder: 0 }
    }
}
