use command_ops::{
    assign_block, collect_sub_entities, create_element_block, create_scoped_element_block,
    id_list_fragment, list_fragment, name_block, set_element_type, EntityList, Keywords, OpError,
    ValueList,
};
use engine_bridge::{EchoMode, MockEngine, SeededBrick, Session};
use scribe_types::{BlockId, Category, ElementClass, SurfaceElement, VolumeElement};

/// Helper: fresh mock engine with one seeded brick.
fn brick_engine() -> (MockEngine, SeededBrick) {
    let mut engine = MockEngine::new();
    let brick = engine.seed_brick();
    (engine, brick)
}

// ── Value list fragments ───────────────────────────────────────────────────

#[test]
fn list_fragment_single_value() {
    assert_eq!(list_fragment(&ValueList::from(17u64)), " 17");
}

#[test]
fn list_fragment_many_preserves_order() {
    assert_eq!(list_fragment(&ValueList::<u64>::from(vec![3u64, 1, 2])), " 3 1 2");
}

#[test]
fn list_fragment_absent_selects_all() {
    assert_eq!(list_fragment::<u64>(&ValueList::All), " all");
}

#[test]
fn list_fragment_empty_list_is_empty() {
    assert_eq!(list_fragment(&ValueList::<u64>::from(Vec::new())), "");
}

// ── Id list fragments ──────────────────────────────────────────────────────

#[test]
fn id_list_homogeneous_returns_shared_category() {
    let (_, brick) = brick_engine();
    let entities = EntityList::from(brick.surfaces.clone());
    let (category, ids) = id_list_fragment(&entities, None).unwrap();

    assert_eq!(category, Category::Surface);
    let expected: String = brick
        .surfaces
        .iter()
        .map(|s| format!(" {}", s.id()))
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn id_list_heterogeneous_fails() {
    let (_, brick) = brick_engine();
    let entities = EntityList::from(vec![brick.volume, brick.surfaces[0]]);
    let err = id_list_fragment(&entities, None).unwrap_err();
    assert!(matches!(
        err,
        OpError::CategoryMismatch {
            expected: Category::Volume,
            found: Category::Surface,
        }
    ));
}

#[test]
fn id_list_required_category_enforced() {
    let (_, brick) = brick_engine();
    let entities = EntityList::from(brick.volume);
    let err = id_list_fragment(&entities, Some(Category::Surface)).unwrap_err();
    assert!(matches!(
        err,
        OpError::CategoryMismatch {
            expected: Category::Surface,
            found: Category::Volume,
        }
    ));
}

#[test]
fn id_list_bare_category_selects_all() {
    let (category, ids) = id_list_fragment(&EntityList::AllOf(Category::Curve), None).unwrap();
    assert_eq!(category, Category::Curve);
    assert_eq!(ids, " all");
}

#[test]
fn id_list_bare_category_respects_required() {
    let err =
        id_list_fragment(&EntityList::AllOf(Category::Curve), Some(Category::Body)).unwrap_err();
    assert!(matches!(err, OpError::CategoryMismatch { .. }));
}

#[test]
fn id_list_empty_with_required_is_empty_fragment() {
    let entities = EntityList::from(Vec::new());
    let (category, ids) = id_list_fragment(&entities, Some(Category::Volume)).unwrap();
    assert_eq!(category, Category::Volume);
    assert_eq!(ids, "");
}

#[test]
fn id_list_empty_without_required_fails() {
    let entities = EntityList::from(Vec::new());
    assert!(matches!(
        id_list_fragment(&entities, None),
        Err(OpError::EmptyList)
    ));
}

// ── Keyword fragments ──────────────────────────────────────────────────────

#[test]
fn keywords_preserve_insertion_order() {
    let keywords = Keywords::new().arg("type", "hex").arg("count", 4);
    assert_eq!(keywords.fragment(), " type hex count 4");
}

#[test]
fn keywords_empty_fragment() {
    assert!(Keywords::new().is_empty());
    assert_eq!(Keywords::new().fragment(), "");
}

// ── Entity gathering ───────────────────────────────────────────────────────

#[test]
fn collect_sub_entities_flattens_in_parent_order() {
    let (engine, brick) = brick_engine();
    let surfaces = collect_sub_entities(&engine, &[brick.body], Category::Surface);
    assert_eq!(surfaces.len(), 6);

    // Adjacent surfaces share curves; shared children are kept per parent.
    let curves =
        collect_sub_entities(&engine, &[brick.surfaces[0], brick.surfaces[2]], Category::Curve);
    assert_eq!(curves.len(), 8);
    assert!(curves.contains(&brick.curves[0]));
}

// ── Block operations ───────────────────────────────────────────────────────

#[test]
fn assign_block_builds_volume_command() {
    let (mut engine, brick) = brick_engine();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    assign_block(
        &mut session,
        BlockId(33),
        &EntityList::from(brick.volume),
        Category::Volume,
    )
    .unwrap();

    let expected = format!("block 33 volume {}", brick.volume.id());
    assert_eq!(engine.commands(), vec![expected.as_str()]);
}

#[test]
fn assign_block_rejects_wrong_category_before_dispatch() {
    let (mut engine, brick) = brick_engine();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    let err = assign_block(
        &mut session,
        BlockId(33),
        &EntityList::from(brick.surfaces.clone()),
        Category::Volume,
    )
    .unwrap_err();

    assert!(matches!(err, OpError::CategoryMismatch { .. }));
    assert!(engine.journal().is_empty(), "nothing may reach the engine");
}

#[test]
fn create_element_block_from_ids() {
    let mut engine = MockEngine::new();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    create_element_block(
        &mut session,
        BlockId(5),
        ElementClass::Hex,
        &ValueList::from(vec![1u64, 2, 3]),
    )
    .unwrap();

    assert_eq!(engine.commands(), vec!["block 5 hex 1 2 3"]);
}

#[test]
fn create_element_block_all_elements() {
    let mut engine = MockEngine::new();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    create_element_block(&mut session, BlockId(5), ElementClass::Tet, &ValueList::All).unwrap();

    assert_eq!(engine.commands(), vec!["block 5 tet all"]);
}

#[test]
fn create_scoped_element_block_in_volume() {
    let (mut engine, brick) = brick_engine();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    create_scoped_element_block(
        &mut session,
        BlockId(33),
        ElementClass::Hex,
        Category::Volume,
        &EntityList::from(brick.volume),
    )
    .unwrap();

    let expected = format!("block 33 hex in volume {}", brick.volume.id());
    assert_eq!(engine.commands(), vec![expected.as_str()]);
}

#[test]
fn set_element_type_volume_and_surface() {
    let mut engine = MockEngine::new();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    set_element_type(&mut session, BlockId(33), VolumeElement::Hex8).unwrap();
    set_element_type(&mut session, BlockId(7), SurfaceElement::Quad4).unwrap();

    assert_eq!(
        engine.commands(),
        vec!["block 33 element type HEX8", "block 7 element type QUAD4"]
    );
}

#[test]
fn name_block_quotes_the_name() {
    let mut engine = MockEngine::new();
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    name_block(&mut session, BlockId(33), "testName").unwrap();

    assert_eq!(engine.commands(), vec!["block 33 name \"testName\""]);
}

#[test]
fn block_command_failure_surfaces_with_command_string() {
    let mut engine = MockEngine::new();
    engine.fail_when("element type");
    let mut session = Session::new(&mut engine, EchoMode::Silent);
    let err = set_element_type(&mut session, BlockId(33), VolumeElement::Hex8).unwrap_err();

    match err {
        OpError::Bridge(engine_bridge::BridgeError::CommandFailed { command }) => {
            assert_eq!(command, "block 33 element type HEX8");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
