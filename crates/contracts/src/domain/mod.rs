pub mod common;

pub mod a001_partner;
pub mod a002_category;
pub mod a003_industry;
pub mod a004_vendor;
pub mod a005_order;
pub mod a006_vendor_query;
