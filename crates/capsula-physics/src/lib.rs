//! Collision shapes for the Capsula toolkit.
//!
//! Three shapes are provided, each in a 2D and a 3D flavour: [`Point`],
//! [`Sphere`] and [`Capsule`]. Every shape keeps its untransformed geometry
//! next to a cached transformed copy that is refreshed by
//! [`AbstractShape::apply_transformation_matrix`]. Collision queries only
//! read the cached copy.
//!
//! Typed pairs are tested with [`Intersects`]. Heterogeneous collections use
//! the closed [`Shape`] enum, whose [`Shape::collides`] matches over both
//! operands and reports pairs without a test as
//! [`CollisionError::UnsupportedPair`].

pub mod capsule;
pub mod collision;
pub mod desc;
pub mod error;
pub mod point;
pub mod shape;
pub mod sphere;

pub use capsule::{Capsule, Capsule2D, Capsule3D};
pub use collision::Intersects;
pub use desc::{CapsuleDesc, PointDesc, ShapeDesc, SphereDesc};
pub use error::{CollisionError, Result};
pub use point::{Point, Point2D, Point3D};
pub use shape::{AbstractShape, Shape, Shape2D, Shape3D, ShapeType};
pub use sphere::{Sphere, Sphere2D, Sphere3D};
