// crates/opcua-nodeset-xml/tests/parsing.rs

use opcua_nodeset::{Array, BuiltinType, DataValue, LocalizedText, NodeId, QualifiedName, Variant};
use opcua_nodeset_xml::{NodeAttributes, NodeClass, NodeSet, load_nodeset_from_str};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn load_pump() -> NodeSet {
    let _ = env_logger::builder().is_test(true).try_init();
    let xml = load_test_file("Pump.NodeSet2.xml");
    load_nodeset_from_str(&xml).expect("Failed to parse Pump.NodeSet2.xml")
}

fn value_of(nodeset: &NodeSet, id: u32) -> Option<DataValue> {
    nodeset
        .node(&NodeId::numeric(1, id))
        .and_then(|n| n.variable())
        .and_then(|v| v.value.clone())
}

#[test]
fn test_document_header() {
    let nodeset = load_pump();

    assert_eq!(nodeset.namespace_uris, vec!["http://example.com/Pump/"]);
    assert!(nodeset.server_uris.is_empty());
    assert_eq!(nodeset.last_modified.as_deref(), Some("2024-05-17T00:00:00Z"));

    assert_eq!(nodeset.models.len(), 1);
    let model = &nodeset.models[0];
    assert_eq!(model.model_uri, "http://example.com/Pump/");
    assert_eq!(model.version.as_deref(), Some("1.0.0"));
    assert_eq!(model.required_models.len(), 1);
    assert_eq!(model.required_models[0].model_uri, "http://opcfoundation.org/UA/");

    assert_eq!(nodeset.aliases.len(), 7);
    assert_eq!(nodeset.aliases["PumpMode"], NodeId::numeric(1, 3000));
}

#[test]
fn test_all_nodes_loaded_in_order() {
    let nodeset = load_pump();

    assert_eq!(nodeset.nodes.len(), 13);
    assert!(nodeset.skipped.is_empty());
    assert_eq!(nodeset.nodes[0].node_class(), NodeClass::DataType);
    assert_eq!(nodeset.nodes[12].browse_name, QualifiedName::new(0, "InputArguments"));
    assert_eq!(nodeset.nodes_of_class(NodeClass::Variable).count(), 7);
}

#[test]
fn test_object_references_are_resolved() {
    let nodeset = load_pump();
    let pump = nodeset
        .node(&NodeId::numeric(1, 5000))
        .expect("Failed to find Pump1");

    assert_eq!(pump.browse_name, QualifiedName::new(1, "Pump1"));
    assert_eq!(pump.parent_node_id, Some(NodeId::numeric(0, 85)));
    assert_eq!(
        pump.display_name,
        vec![
            LocalizedText::new(Some("en"), "Pump 1"),
            LocalizedText::new(Some("de"), "Pumpe 1"),
        ]
    );

    // "Organizes" is not aliased in the file; it resolves through the standard names.
    let organizes = &pump.references[0];
    assert_eq!(organizes.reference_type, NodeId::numeric(0, 35));
    assert!(!organizes.is_forward);

    assert_eq!(pump.type_definition(), Some(&NodeId::numeric(1, 1000)));

    let feeds = &pump.references[3];
    assert_eq!(feeds.reference_type, NodeId::numeric(1, 4000));
    assert_eq!(feeds.target, NodeId::string(1, "Tank1"));
}

#[test]
fn test_variable_attributes() {
    let nodeset = load_pump();
    let speed = nodeset
        .node(&NodeId::numeric(1, 5001))
        .and_then(|n| n.variable())
        .expect("Speed should be a variable");

    assert_eq!(speed.data_type, NodeId::numeric(0, 11));
    assert_eq!(speed.value_rank, -1);
    assert!(speed.array_dimensions.is_empty());
    assert_eq!(speed.access_level, 3);
    assert_eq!(speed.value, Some(DataValue::new(1450.5f64)));
}

#[test]
fn test_array_values_and_dimensions() {
    let nodeset = load_pump();

    let setpoints = nodeset
        .node(&NodeId::numeric(1, 5002))
        .and_then(|n| n.variable())
        .unwrap();
    assert_eq!(setpoints.array_dimensions, vec![3]);
    let expected = Array::new(
        BuiltinType::Int32,
        vec![Variant::Int32(10), Variant::Int32(20), Variant::Int32(30)],
    );
    assert_eq!(setpoints.value, Some(DataValue::new(expected)));

    let calibration = nodeset
        .node(&NodeId::numeric(1, 5003))
        .and_then(|n| n.variable())
        .unwrap();
    assert_eq!(calibration.array_dimensions, vec![2, 2]);
    let value = calibration.value.as_ref().unwrap();
    let matrix = value.value.as_array().expect("Calibration should hold a matrix");
    assert_eq!(matrix.dimensions, vec![2, 2]);
    assert_eq!(matrix.values[3], Variant::Double(1.0));
}

#[test]
fn test_alias_data_type() {
    let nodeset = load_pump();
    let mode = nodeset
        .node(&NodeId::numeric(1, 5004))
        .and_then(|n| n.variable())
        .unwrap();
    assert_eq!(mode.data_type, NodeId::numeric(1, 3000));
    assert_eq!(mode.value, Some(DataValue::new(2i32)));

    // "String" has no alias; the standard name applies.
    let serial = nodeset
        .node(&NodeId::numeric(1, 5006))
        .and_then(|n| n.variable())
        .unwrap();
    assert_eq!(serial.data_type, NodeId::numeric(0, 12));
    assert_eq!(serial.value, None);
}

#[test]
fn test_bad_value_loads_as_null() {
    let nodeset = load_pump();
    let broken = value_of(&nodeset, 5005).expect("Broken should still carry a value");
    assert!(broken.is_null());
}

#[test]
fn test_extension_object_value() {
    let nodeset = load_pump();
    let args = value_of(&nodeset, 5008).unwrap();
    let array = args.value.as_array().expect("InputArguments should be an array");
    assert_eq!(array.value_type, BuiltinType::ExtensionObject);
    assert_eq!(array.values.len(), 1);

    let Variant::ExtensionObject(argument) = &array.values[0] else {
        panic!("Expected an ExtensionObject, got {:?}", array.values[0]);
    };
    assert_eq!(argument.type_id, NodeId::numeric(0, 297));
    let body = argument.body.as_ref().expect("Argument body should be kept");
    assert_eq!(body.local_name(), "Argument");
    assert_eq!(body.child("Name").map(|n| n.text()), Some("Mode"));
}

#[test]
fn test_type_nodes() {
    let nodeset = load_pump();

    let pump_mode = nodeset.node(&NodeId::numeric(1, 3000)).unwrap();
    let NodeAttributes::DataType { definition, .. } = &pump_mode.attributes else {
        panic!("PumpMode should be a data type");
    };
    let definition = definition.as_ref().expect("PumpMode has a definition");
    assert_eq!(definition.name, QualifiedName::new(1, "PumpMode"));
    assert_eq!(definition.fields.len(), 3);
    assert_eq!(definition.fields[2].name, "Automatic");
    assert_eq!(definition.fields[2].value, Some(2));
    assert_eq!(definition.fields[2].data_type, NodeId::numeric(0, 24));

    let feeds = nodeset.node(&NodeId::numeric(1, 4000)).unwrap();
    assert_eq!(
        feeds.attributes,
        NodeAttributes::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: vec![LocalizedText::new(None, "FedBy")],
        }
    );

    let speed_type = nodeset.node(&NodeId::numeric(1, 2000)).unwrap();
    assert_eq!(speed_type.node_class(), NodeClass::VariableType);
    let attrs = speed_type.variable().unwrap();
    assert!(attrs.is_abstract);
    assert_eq!(attrs.value, Some(DataValue::new(0.0f64)));

    let start = nodeset.node(&NodeId::numeric(1, 5007)).unwrap();
    assert_eq!(
        start.attributes,
        NodeAttributes::Method {
            executable: true,
            user_executable: true,
            method_declaration_id: None,
        }
    );
}
