pub mod curve;
pub mod extrude;
pub mod mesh;
pub mod path;
pub mod shapes;
pub mod tube;

pub use curve::*;
pub use extrude::*;
pub use mesh::*;
pub use path::*;
pub use tube::*;
