//! Shared fixtures for container tests
//!
//! Each fixture describes its own constructor through [`Reflect`], the way an
//! application type would.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use capsule::{
    Constructor, ConstructorParameter, Container, Reflect, TypeCatalog, TypeDescriptor,
    TypeIdentity, TypeKind,
};

/// Identity of a contract that has no implementation
pub const REPOSITORY_CONTRACT: &str = "fixtures::Repository";

#[derive(Debug)]
pub struct Service {
    pub label: String,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            label: "service".to_string(),
        }
    }
}

impl Reflect for Service {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().implicit(Service::default)
    }
}

// Service is also discoverable at link time
#[linkme::distributed_slice(capsule::REFLECTED_TYPES)]
static SERVICE_DESCRIPTOR: fn() -> TypeDescriptor = <Service as Reflect>::descriptor;

#[derive(Debug, Default)]
pub struct ServiceTwo {
    pub label: String,
}

impl Reflect for ServiceTwo {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().implicit(ServiceTwo::default)
    }
}

#[derive(Debug, Default)]
pub struct ServiceThree {
    pub label: String,
}

impl Reflect for ServiceThree {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().implicit(ServiceThree::default)
    }
}

#[derive(Debug, Default)]
pub struct NoConstructor {
    pub touched: bool,
}

impl Reflect for NoConstructor {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().implicit(NoConstructor::default)
    }
}

#[derive(Debug)]
pub struct PrivateConstructor;

impl Reflect for PrivateConstructor {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
            .constructor(Constructor::new(vec![], |_| Ok(PrivateConstructor)).private())
    }
}

#[derive(Debug)]
pub struct AbstractHandler;

impl Reflect for AbstractHandler {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
            .implicit(|| AbstractHandler)
            .with_kind(TypeKind::Abstract)
    }
}

#[derive(Debug)]
pub struct PrimitiveConstructor {
    pub array: Vec<String>,
    pub int: i64,
    pub string: String,
    pub boolean: bool,
}

impl Reflect for PrimitiveConstructor {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(
            vec![
                ConstructorParameter::new("array"),
                ConstructorParameter::new("int"),
                ConstructorParameter::new("string"),
                ConstructorParameter::new("boolean"),
            ],
            |args| {
                Ok(PrimitiveConstructor {
                    array: args.cloned("array")?,
                    int: args.cloned("int")?,
                    string: args.cloned("string")?,
                    boolean: args.cloned("boolean")?,
                })
            },
        )
    }
}

#[derive(Debug)]
pub struct ConstructorWithClasses {
    pub service1: Arc<Service>,
    pub service2: Arc<ServiceTwo>,
    pub service3: Arc<ServiceThree>,
}

impl Reflect for ConstructorWithClasses {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(
            vec![
                ConstructorParameter::of::<Service>("service1"),
                ConstructorParameter::of::<ServiceTwo>("service2"),
                ConstructorParameter::of::<ServiceThree>("service3"),
            ],
            |args| {
                Ok(ConstructorWithClasses {
                    service1: args.get("service1")?,
                    service2: args.get("service2")?,
                    service3: args.get("service3")?,
                })
            },
        )
    }
}

#[derive(Debug)]
pub struct ConstructorWithDefaults {
    pub array: Vec<String>,
    pub string: String,
    pub int: i64,
}

impl Reflect for ConstructorWithDefaults {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(
            vec![
                ConstructorParameter::new("array")
                    .with_default(vec!["test".to_string(), "test".to_string()]),
                ConstructorParameter::new("string").with_default("test".to_string()),
                ConstructorParameter::new("int").with_default(12_i64),
            ],
            |args| {
                Ok(ConstructorWithDefaults {
                    array: args.cloned("array")?,
                    string: args.cloned("string")?,
                    int: args.cloned("int")?,
                })
            },
        )
    }
}

/// Bottom of the `Upper(Middle(Lower))` chain
#[derive(Debug, Default)]
pub struct Lower {
    pub depth: u8,
}

impl Reflect for Lower {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().implicit(|| Lower { depth: 3 })
    }
}

#[derive(Debug)]
pub struct Middle {
    pub lower: Arc<Lower>,
}

impl Reflect for Middle {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(vec![ConstructorParameter::of::<Lower>("lower")], |args| {
            Ok(Middle {
                lower: args.get("lower")?,
            })
        })
    }
}

#[derive(Debug)]
pub struct Upper {
    pub middle: Arc<Middle>,
    pub name: String,
}

impl Reflect for Upper {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(
            vec![
                ConstructorParameter::of::<Middle>("middle"),
                ConstructorParameter::new("name").with_default("upper".to_string()),
            ],
            |args| {
                Ok(Upper {
                    middle: args.get("middle")?,
                    name: args.cloned("name")?,
                })
            },
        )
    }
}

/// Depends on a type whose own constructor cannot be satisfied
#[derive(Debug)]
pub struct NeedsPrimitive {
    pub inner: Arc<PrimitiveConstructor>,
}

impl Reflect for NeedsPrimitive {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(
            vec![ConstructorParameter::of::<PrimitiveConstructor>("inner")],
            |args| {
                Ok(NeedsPrimitive {
                    inner: args.get("inner")?,
                })
            },
        )
    }
}

/// `Chicken` and `Egg` require each other
#[derive(Debug)]
pub struct Chicken {
    pub egg: Arc<Egg>,
}

#[derive(Debug)]
pub struct Egg {
    pub chicken: Arc<Chicken>,
}

impl Reflect for Chicken {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(vec![ConstructorParameter::of::<Egg>("egg")], |args| {
            Ok(Chicken {
                egg: args.get("egg")?,
            })
        })
    }
}

impl Reflect for Egg {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>().construct(
            vec![ConstructorParameter::of::<Chicken>("chicken")],
            |args| {
                Ok(Egg {
                    chicken: args.get("chicken")?,
                })
            },
        )
    }
}

/// Identity string of a fixture type
pub fn id<T>() -> String {
    TypeIdentity::of::<T>().to_string()
}

/// Catalog holding every fixture
pub fn catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .register_type::<Service>()
        .register_type::<ServiceTwo>()
        .register_type::<ServiceThree>()
        .register_type::<NoConstructor>()
        .register_type::<PrivateConstructor>()
        .register_type::<AbstractHandler>()
        .register_type::<PrimitiveConstructor>()
        .register_type::<ConstructorWithClasses>()
        .register_type::<ConstructorWithDefaults>()
        .register_type::<Lower>()
        .register_type::<Middle>()
        .register_type::<Upper>()
        .register_type::<NeedsPrimitive>()
        .register_type::<Chicken>()
        .register_type::<Egg>()
        .register(TypeDescriptor::new(REPOSITORY_CONTRACT).with_kind(TypeKind::Interface));
    catalog
}

/// Container over the fixture catalog
pub fn container() -> Container {
    Container::with_catalog(catalog())
}

/// Counts how often a recipe runs
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn tick(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
