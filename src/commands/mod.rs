mod icons;
mod scan;

pub use icons::icons;
pub use scan::scan;
