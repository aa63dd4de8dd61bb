pub mod args;
pub mod block;
pub mod entities;
pub mod numeric;
pub mod types;

pub use args::{id_list_fragment, list_fragment, EntityList, Keywords, ValueList};
pub use block::{
    assign_block, create_element_block, create_scoped_element_block, name_block, set_element_type,
};
pub use entities::collect_sub_entities;
pub use numeric::{round_all, snap_zero};
pub use types::OpError;
