pub mod id;
pub mod order;
pub mod status;
pub mod view;
