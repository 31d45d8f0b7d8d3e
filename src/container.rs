use alloc::{string::String, vec::Vec};
use core::any::type_name;
use parking_lot::Mutex;
use tracing::{debug, debug_span, error, info_span, warn};

use crate::{
    any::Instance,
    args::FromArgs,
    binding::{BindingRecord, Target},
    cache::Cache,
    dependency::Arg,
    errors::{InstantiateErrorKind, ResolveErrorKind},
    instantiator::{boxed_constructor, boxed_factory, Constructible, Factory},
    lock::KeyedLocks,
    registry::Registry,
    service::Service as _,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
    Config,
};

/// Registry of named bindings with a cache of resolved singletons.
///
/// The container is a shared handle: clones see the same bindings and the same cache.
/// Registration methods take `&self` and return `&Self`, so they can be chained and
/// called at any time, also after resolutions.
///
/// # Examples
/// ```rust
/// use bindi::{args, Container, Inject, InjectCloned};
///
/// struct Greeter(String);
///
/// let container = Container::new();
/// container
///     .bind_factory("greeter", |Inject(name): Inject<String>| Ok(Greeter(format!("Hello {name}!"))), args![@"name"])
///     .bind_factory("name", |InjectCloned(name): InjectCloned<String>| Ok(name.chars().rev().collect::<String>()), args![@"reversed_name"])
///     .bind_value("reversed_name", String::from("ecilA"));
///
/// assert_eq!(container.get::<Greeter>("greeter").unwrap().0, "Hello Alice!");
/// ```
#[derive(Clone)]
pub struct Container {
    pub(crate) inner: RcThreadSafety<ContainerInner>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RcThreadSafety::new(ContainerInner {
                registry: Mutex::new(Registry::new()),
                cache: Mutex::new(Cache::new()),
                locks: KeyedLocks::new(),
            }),
        }
    }

    /// Binds a ready value.
    /// Every resolution returns the same shared value.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    #[inline]
    #[track_caller]
    pub fn bind_value<T>(&self, name: impl Into<String>, value: T) -> &Self
    where
        T: SendSafety + SyncSafety + 'static,
    {
        self.bind(BindingRecord::new(
            binding_name(name),
            Target::Value(Instance::new(value)),
            Vec::new(),
            Config::singleton(),
        ))
    }

    /// Binds a factory called with the resolved `args` in order.
    /// The produced value is cached as a singleton, use [`Self::bind_factory_with_config`] to change it.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    #[inline]
    #[track_caller]
    pub fn bind_factory<F, Args>(&self, name: impl Into<String>, factory: F, args: Vec<Arg>) -> &Self
    where
        F: Factory<Args, Error = InstantiateErrorKind> + SendSafety + SyncSafety,
        F::Provides: SendSafety + SyncSafety,
        Args: FromArgs,
    {
        self.bind_factory_with_config(name, factory, args, Config::default())
    }

    /// # Panics
    /// Panics if `name` is empty.
    #[inline]
    #[track_caller]
    pub fn bind_factory_with_config<F, Args>(&self, name: impl Into<String>, factory: F, args: Vec<Arg>, config: Config) -> &Self
    where
        F: Factory<Args, Error = InstantiateErrorKind> + SendSafety + SyncSafety,
        F::Provides: SendSafety + SyncSafety,
        Args: FromArgs,
    {
        self.bind(BindingRecord::new(
            binding_name(name),
            Target::Factory(boxed_factory(factory)),
            args,
            config,
        ))
    }

    /// Binds the constructor of `T`, called with the resolved `args` in order.
    /// The constructed value is cached as a singleton, use [`Self::bind_constructor_with_config`] to change it.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    #[inline]
    #[track_caller]
    pub fn bind_constructor<T>(&self, name: impl Into<String>, args: Vec<Arg>) -> &Self
    where
        T: Constructible + SendSafety + SyncSafety,
    {
        self.bind_constructor_with_config::<T>(name, args, Config::default())
    }

    /// # Panics
    /// Panics if `name` is empty.
    #[inline]
    #[track_caller]
    pub fn bind_constructor_with_config<T>(&self, name: impl Into<String>, args: Vec<Arg>, config: Config) -> &Self
    where
        T: Constructible + SendSafety + SyncSafety,
    {
        self.bind(BindingRecord::new(
            binding_name(name),
            Target::Constructor(boxed_constructor::<T>()),
            args,
            config,
        ))
    }

    /// Gets the value of a binding
    ///
    /// # Notes
    /// Singleton bindings are built once and then served from the cache until they are bound again.
    /// Transient bindings are built on every call, together with their whole chain of dependencies
    /// (dependencies that are singletons themselves still come from the cache).
    /// Builds of the same binding never run concurrently, concurrent callers wait for each other.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoBinding`] if `name` or one of the bindings it depends on isn't bound
    /// - Returns [`ResolveErrorKind::CyclicDependency`] if the binding depends on itself, either through its
    ///   arguments or through a factory that calls back into the container for a binding still being built
    ///   on the same thread
    /// - Returns [`ResolveErrorKind::IncorrectType`] if the value isn't a `T`
    /// - Returns [`ResolveErrorKind::Instantiator`] if the arguments don't fit the factory or constructor,
    ///   or if it fails itself
    pub fn get<T: SendSafety + SyncSafety + 'static>(&self, name: &str) -> Result<RcThreadSafety<T>, ResolveErrorKind> {
        let span = info_span!("get", binding = name, dependency = type_name::<T>());
        let _guard = span.enter();

        match self.resolve(name, &mut Vec::new())?.downcast() {
            Ok(dependency) => Ok(dependency),
            Err(err) => {
                let err = ResolveErrorKind::IncorrectType(err);
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Gets the type-erased value of a binding.
    ///
    /// # Errors
    /// Same as [`Self::get`], except for [`ResolveErrorKind::IncorrectType`].
    pub fn get_instance(&self, name: &str) -> Result<Instance, ResolveErrorKind> {
        let span = info_span!("get_instance", binding = name);
        let _guard = span.enter();

        self.resolve(name, &mut Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.registry.lock().contains(name)
    }

    /// Whether the binding has a cached value
    #[inline]
    #[must_use]
    pub fn is_resolved(&self, name: &str) -> bool {
        self.inner.cache.lock().get(name).is_some()
    }

    #[inline]
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<RcThreadSafety<BindingRecord>> {
        self.inner.registry.lock().get(name)
    }

    /// Names of all bindings, sorted
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.inner.registry.lock().names()
    }
}

impl Container {
    fn bind(&self, record: BindingRecord) -> &Self {
        let span = info_span!("bind", binding = record.name(), kind = %record.kind());
        let _guard = span.enter();

        let mut registry = self.inner.registry.lock();
        if self.inner.cache.lock().remove(record.name()).is_some() {
            debug!("Cached value evicted");
        }
        if registry.insert(record).is_some() {
            debug!("Previous binding replaced");
        }

        self
    }

    fn resolve(&self, name: &str, path: &mut Vec<String>) -> Result<Instance, ResolveErrorKind> {
        let span = debug_span!("resolve", binding = name);
        let _guard = span.enter();

        let Some(record) = self.inner.registry.lock().get(name) else {
            let err = ResolveErrorKind::NoBinding { name: String::from(name) };
            error!("{}", err);
            return Err(err);
        };

        if record.is_singleton() {
            let cached = self.inner.cache.lock().get(name);
            if let Some(instance) = cached {
                debug!("Found in cache");
                return Ok(instance);
            }
            debug!("Not found in cache");
        }

        if let Some(position) = path.iter().position(|resolving| resolving == name) {
            let mut cycle = path[position..].to_vec();
            cycle.push(String::from(name));
            return Err(cyclic_dependency(cycle));
        }

        let lock = self.inner.locks.get(name);
        // Held by this thread but not on the path: a factory called back into the container
        if lock.is_owned_by_current_thread() {
            let mut cycle = Vec::with_capacity(path.len() + 2);
            cycle.push(String::from(name));
            cycle.extend(path.iter().cloned());
            cycle.push(String::from(name));
            return Err(cyclic_dependency(cycle));
        }

        path.push(String::from(name));
        let result = {
            let _construction_guard = lock.lock();
            if record.is_singleton() {
                self.resolve_singleton(&record, path)
            } else {
                self.instantiate(&record, path)
            }
        };
        path.pop();

        result
    }

    /// Expects the construction lock of the binding to be held
    fn resolve_singleton(&self, record: &RcThreadSafety<BindingRecord>, path: &mut Vec<String>) -> Result<Instance, ResolveErrorKind> {
        let name = record.name();

        // Another caller may have built it while we were waiting for the lock
        let cached = self.inner.cache.lock().get(name);
        if let Some(instance) = cached {
            debug!("Found in cache after construction by another caller");
            return Ok(instance);
        }

        let instance = self.instantiate(record, path)?;

        let registry = self.inner.registry.lock();
        if registry.is_current(record) {
            self.inner.cache.lock().insert(name, instance.clone());
            debug!("Cached");
        } else {
            warn!("Binding was replaced during construction, value isn't cached");
        }

        Ok(instance)
    }

    fn instantiate(&self, record: &BindingRecord, path: &mut Vec<String>) -> Result<Instance, ResolveErrorKind> {
        let instantiator = match record.target() {
            Target::Value(instance) => return Ok(instance.clone()),
            Target::Factory(instantiator) | Target::Constructor(instantiator) => instantiator,
        };

        let args = self.resolve_args(record.args(), path)?;
        match instantiator.call(args) {
            Ok(instance) => {
                debug!(kind = %record.kind(), "Resolved");
                Ok(instance)
            }
            Err(err) => {
                let err = ResolveErrorKind::Instantiator(err);
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn resolve_args(&self, args: &[Arg], path: &mut Vec<String>) -> Result<Vec<Instance>, ResolveErrorKind> {
        let mut resolved = Vec::with_capacity(args.len());
        for arg in args {
            let instance = match arg {
                Arg::Literal(instance) => instance.clone(),
                Arg::Dependency(dependency) => self.resolve(dependency.name(), path)?,
            };
            resolved.push(instance);
        }
        Ok(resolved)
    }
}

pub(crate) struct ContainerInner {
    pub(crate) registry: Mutex<Registry>,
    pub(crate) cache: Mutex<Cache>,
    pub(crate) locks: KeyedLocks,
}

fn cyclic_dependency(path: Vec<String>) -> ResolveErrorKind {
    let err = ResolveErrorKind::CyclicDependency { path };
    error!("{}", err);
    err
}

#[inline]
#[track_caller]
fn binding_name(name: impl Into<String>) -> String {
    let name = name.into();
    assert!(!name.is_empty(), "binding name can't be empty");
    name
}
