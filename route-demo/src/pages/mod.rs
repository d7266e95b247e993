pub mod view_a;
pub mod view_b;
pub mod view_c;
pub mod view_d;
pub mod view_z;

pub use view_a::{ViewA, ViewARouter};
pub use view_b::{ViewB, ViewBRouter};
pub use view_c::{ViewC, ViewCRouter};
pub use view_d::{ViewD, ViewDRouter};
pub use view_z::{ViewZ, ViewZRouter};
