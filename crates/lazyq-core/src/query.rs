//! `Query`: an immutable, re-iterable factory of cursors.
//!
//! Every stage is built the same way: capture the upstream query and the
//! stage parameters at construction time, and return a new query whose
//! factory (a) asks the upstream for a fresh cursor, (b) performs any
//! once-per-cursor setup, and (c) returns the per-element pull closure.

use std::fmt;
use std::rc::Rc;

use crate::config::QueryConfig;
use crate::cursor::Cursor;

type Factory<T> = Rc<dyn Fn() -> Cursor<T>>;

pub struct Query<T> {
    factory: Factory<T>,
    config: QueryConfig,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
            config: self.config.clone(),
        }
    }
}

impl<T: 'static> Query<T> {
    /// Build a query from a cursor factory, using the default config.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Cursor<T> + 'static,
    {
        Self {
            factory: Rc::new(factory),
            config: QueryConfig::default(),
        }
    }

    /// Same recipe, different config. Stages built on top inherit it.
    pub fn with_config(self, config: QueryConfig) -> Self {
        Self {
            factory: self.factory,
            config,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Manufacture a fresh cursor from the beginning of the pipeline.
    ///
    /// Re-running this re-runs every upstream stage from the root source.
    pub fn iterate(&self) -> Cursor<T> {
        (self.factory)()
    }

    /// Build a downstream query that inherits this query's config.
    pub fn derive<U, F>(&self, factory: F) -> Query<U>
    where
        U: 'static,
        F: Fn() -> Cursor<U> + 'static,
    {
        Query {
            factory: Rc::new(factory),
            config: self.config.clone(),
        }
    }
}

impl<T: 'static> IntoIterator for &Query<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.iterate()
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
