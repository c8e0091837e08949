//! Constructor metadata
//!
//! Rust cannot enumerate a constructor's parameters at runtime, so each
//! buildable type describes itself with a [`TypeDescriptor`]: its identity,
//! whether it can be instantiated at all, and (when it declares a
//! constructor) the ordered parameter list plus the function that turns
//! resolved [`Arguments`] into a value.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use super::arguments::Arguments;
use super::identity::TypeIdentity;
use crate::error::Result;
use crate::value::Value;

/// Producer for a type without a declared constructor
pub type ImplicitFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Invoker for a declared constructor
pub type ConstructFn = Arc<dyn Fn(&Arguments) -> Result<Value> + Send + Sync>;

/// A single constructor parameter, in declaration order
#[derive(Clone, Debug)]
pub struct ConstructorParameter {
    name: String,
    declared_type: Option<TypeIdentity>,
    default: Option<Value>,
}

impl ConstructorParameter {
    /// An untyped parameter with no default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            default: None,
        }
    }

    /// A parameter whose value the container can build
    pub fn typed(name: impl Into<String>, declared_type: impl Into<TypeIdentity>) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type.into()),
            default: None,
        }
    }

    /// A parameter typed as the Rust type `T`
    pub fn of<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::typed(name, TypeIdentity::of::<T>())
    }

    /// Attach a default value
    #[must_use]
    pub fn with_default<T: Any + Send + Sync>(mut self, default: T) -> Self {
        self.default = Some(Value::new(default));
        self
    }

    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, if any
    pub fn declared_type(&self) -> Option<&TypeIdentity> {
        self.declared_type.as_ref()
    }

    /// Whether a default exists
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Default value, if any
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// What kind of type a descriptor names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeKind {
    /// A type that may be instantiated
    #[default]
    Concrete,
    /// A partially implemented type
    Abstract,
    /// A pure contract
    Interface,
}

/// A declared constructor
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<ConstructorParameter>,
    accessible: bool,
    invoke: ConstructFn,
}

impl Constructor {
    /// A public constructor producing `T`
    pub fn new<T, F>(parameters: Vec<ConstructorParameter>, construct: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            parameters,
            accessible: true,
            invoke: Arc::new(move |arguments| construct(arguments).map(Value::new)),
        }
    }

    /// Mark the constructor inaccessible to the container
    #[must_use]
    pub fn private(mut self) -> Self {
        self.accessible = false;
        self
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[ConstructorParameter] {
        &self.parameters
    }

    /// Whether the container may call it
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// Invoke with a fully resolved argument list
    pub fn invoke(&self, arguments: &Arguments) -> Result<Value> {
        (self.invoke)(arguments)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .field("accessible", &self.accessible)
            .finish_non_exhaustive()
    }
}

/// How a type comes into existence
#[derive(Clone)]
pub enum Instantiation {
    /// No declared constructor: instantiate with no arguments
    Implicit(ImplicitFn),
    /// A declared constructor whose parameters must be resolved
    Declared(Constructor),
    /// Nothing to call (abstract types and interfaces)
    Unavailable,
}

impl fmt::Debug for Instantiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit(_) => f.write_str("Implicit"),
            Self::Declared(constructor) => f.debug_tuple("Declared").field(constructor).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// Everything the builder needs to know about a type
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    identity: TypeIdentity,
    kind: TypeKind,
    rust_type: Option<TypeId>,
    instantiation: Instantiation,
}

impl TypeDescriptor {
    /// Describe a type by identity alone
    pub fn new(identity: impl Into<TypeIdentity>) -> Self {
        Self {
            identity: identity.into(),
            kind: TypeKind::Concrete,
            rust_type: None,
            instantiation: Instantiation::Unavailable,
        }
    }

    /// Describe the Rust type `T`
    pub fn of<T: Any>() -> Self {
        Self {
            rust_type: Some(TypeId::of::<T>()),
            ..Self::new(TypeIdentity::of::<T>())
        }
    }

    /// Set the kind
    #[must_use]
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// The type declares no constructor; `produce` creates an instance
    #[must_use]
    pub fn implicit<T, F>(mut self, produce: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.instantiation = Instantiation::Implicit(Arc::new(move || Value::new(produce())));
        self
    }

    /// The type declares a constructor
    #[must_use]
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.instantiation = Instantiation::Declared(constructor);
        self
    }

    /// Shorthand for a public declared constructor
    #[must_use]
    pub fn construct<T, F>(self, parameters: Vec<ConstructorParameter>, construct: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        self.constructor(Constructor::new(parameters, construct))
    }

    /// Type identity
    pub fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    /// Type kind
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Rust `TypeId`, when the descriptor was built from a Rust type
    pub fn rust_type(&self) -> Option<TypeId> {
        self.rust_type
    }

    /// How the type is instantiated
    pub fn instantiation(&self) -> &Instantiation {
        &self.instantiation
    }

    /// Whether the builder may create instances of this type
    pub fn is_instantiable(&self) -> bool {
        if self.kind != TypeKind::Concrete {
            return false;
        }
        match &self.instantiation {
            Instantiation::Implicit(_) => true,
            Instantiation::Declared(constructor) => constructor.is_accessible(),
            Instantiation::Unavailable => false,
        }
    }
}

/// Types that describe their own construction
///
/// ```
/// use capsule_domain::{Reflect, TypeDescriptor};
///
/// #[derive(Default)]
/// struct Clock;
///
/// impl Reflect for Clock {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::of::<Self>().implicit(Clock::default)
///     }
/// }
///
/// assert!(Clock::descriptor().is_instantiable());
/// ```
pub trait Reflect: Any + Send + Sync {
    /// Static constructor metadata for `Self`
    fn descriptor() -> TypeDescriptor;
}
