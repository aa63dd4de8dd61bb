//! Block commands: named groupings of mesh elements within one body,
//! used for material/region tagging.

use engine_bridge::{Command, Session};
use scribe_types::{BlockId, Category, ElementClass, ElementType};

use crate::args::{id_list_fragment, list_fragment, EntityList, ValueList};
use crate::types::OpError;

/// Assign entities to a block: `block <id> <category> <idList>`.
///
/// Every entity must match `category`; the meshed-volume case passes
/// `Category::Volume`.
pub fn assign_block(
    session: &mut Session<'_>,
    block: BlockId,
    entities: &EntityList,
    category: Category,
) -> Result<(), OpError> {
    let (_, ids) = id_list_fragment(entities, Some(category))?;
    let command = Command::new("block").arg(block).arg(category).fragment(&ids);
    session.run(command)?;
    Ok(())
}

/// Create a block directly from raw element ids:
/// `block <id> <elementClass> <idList>`.
///
/// `ValueList::All` selects every element of the class.
pub fn create_element_block(
    session: &mut Session<'_>,
    block: BlockId,
    class: ElementClass,
    elements: &ValueList<u64>,
) -> Result<(), OpError> {
    let command = Command::new("block")
        .arg(block)
        .arg(class)
        .fragment(&list_fragment(elements));
    session.run(command)?;
    Ok(())
}

/// Create a block from the elements inside entities of one category:
/// `block <id> <elementClass> in <category> <idList>`.
pub fn create_scoped_element_block(
    session: &mut Session<'_>,
    block: BlockId,
    class: ElementClass,
    scope: Category,
    entities: &EntityList,
) -> Result<(), OpError> {
    let (_, ids) = id_list_fragment(entities, Some(scope))?;
    let command = Command::new("block")
        .arg(block)
        .arg(class)
        .arg("in")
        .arg(scope)
        .fragment(&ids);
    session.run(command)?;
    Ok(())
}

/// Set a block's element type: `block <id> element type <TYPE>`.
pub fn set_element_type(
    session: &mut Session<'_>,
    block: BlockId,
    element: impl Into<ElementType>,
) -> Result<(), OpError> {
    let command = Command::new("block")
        .arg(block)
        .arg("element")
        .arg("type")
        .arg(element.into());
    session.run(command)?;
    Ok(())
}

/// Assign a human-readable name: `block <id> name "<name>"`.
pub fn name_block(session: &mut Session<'_>, block: BlockId, name: &str) -> Result<(), OpError> {
    let command = Command::new("block")
        .arg(block)
        .arg("name")
        .arg(format_args!("\"{}\"", name));
    session.run(command)?;
    Ok(())
}
