pub mod ad;
pub mod category;
