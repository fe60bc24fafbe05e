pub mod meter;
pub mod property;
pub mod reading;
pub mod unit;

pub use meter::{Meter, MeterType};
pub use property::{Property, PropertyType};
pub use reading::Reading;
pub use unit::Unit;
