// crates/opcua-nodeset/src/identifiers.rs
//! Registry of the standard (namespace 0) identifiers defined by OPC UA Part 6.
//!
//! Node sets often reference built-in types and reference types by their bare
//! programmatic name (`Int32`, `HasComponent`, ...) without declaring an alias.
//! This module maps those names to their numeric `NodeId`s. It covers every
//! standard reference type and data type, plus the object types, variable
//! types, folders, modelling rules and encodings that node sets commonly name.
//!
//! The table is a sorted `static` slice, so it needs no initialization and can
//! never be mutated.

use crate::types::NodeId;

// --- Frequently used identifiers ---

pub const BASE_DATA_TYPE: NodeId = NodeId::numeric(0, 24);
pub const BASE_OBJECT_TYPE: NodeId = NodeId::numeric(0, 58);
pub const BASE_DATA_VARIABLE_TYPE: NodeId = NodeId::numeric(0, 63);
pub const HAS_SUBTYPE: NodeId = NodeId::numeric(0, 45);
pub const HAS_PROPERTY: NodeId = NodeId::numeric(0, 46);
pub const HAS_COMPONENT: NodeId = NodeId::numeric(0, 47);
pub const HAS_TYPE_DEFINITION: NodeId = NodeId::numeric(0, 40);
pub const ORGANIZES: NodeId = NodeId::numeric(0, 35);

/// Name -> numeric identifier (namespace 0), sorted by name.
static WELL_KNOWN: &[(&str, u32)] = &[
    ("AccessLevelExType", 15406),
    ("AccessLevelType", 15031),
    ("AccessRestrictionType", 95),
    ("AddNodesItem", 376),
    ("AddReferencesItem", 379),
    ("AggregateFilter", 728),
    ("Aggregates", 44),
    ("AlarmGroupMember", 16362),
    ("AliasFor", 23469),
    ("AlwaysGeneratesEvent", 3065),
    ("AnalogItemType", 2368),
    ("Annotation", 891),
    ("AnonymousIdentityToken", 319),
    ("ApplicationDescription", 308),
    ("ApplicationType", 307),
    ("Argument", 296),
    ("Argument_Encoding_DefaultBinary", 298),
    ("Argument_Encoding_DefaultXml", 297),
    ("ArrayItemType", 12021),
    ("AssociatedWith", 24137),
    ("AttributeOperand", 598),
    ("AttributeWriteMask", 347),
    ("AudioDataType", 16307),
    ("AxisInformation", 12079),
    ("AxisScaleEnumeration", 12077),
    ("BaseDataType", 24),
    ("BaseDataVariableType", 63),
    ("BaseEventType", 2041),
    ("BaseObjectType", 58),
    ("BaseVariableType", 62),
    ("BitFieldMaskDataType", 11737),
    ("Boolean", 1),
    ("BrokerTransportQualityOfService", 15008),
    ("BrowseDescription", 514),
    ("BrowseDirection", 510),
    ("BrowsePath", 543),
    ("BrowsePathResult", 549),
    ("BrowsePathTarget", 546),
    ("BrowseResult", 522),
    ("BrowseResultMask", 517),
    ("BuildInfo", 338),
    ("Byte", 3),
    ("ByteString", 15),
    ("CartesianCoordinates", 18809),
    ("ChannelSecurityToken", 441),
    ("ComplexNumberType", 12171),
    ("ConditionType", 2782),
    ("ConfigurationVersionDataType", 14593),
    ("ContentFilter", 586),
    ("ContentFilterElement", 583),
    ("ContinuationPoint", 521),
    ("Controls", 25254),
    ("Counter", 289),
    ("CurrencyUnitType", 23498),
    ("DataChangeFilter", 722),
    ("DataChangeTrigger", 717),
    ("DataItemType", 2365),
    ("DataSetMetaDataType", 14523),
    ("DataSetToWriter", 14936),
    ("DataTypeDefinition", 97),
    ("DataTypeDescription", 14525),
    ("DataTypeDescriptionType", 69),
    ("DataTypeDictionaryType", 72),
    ("DataTypeEncodingType", 76),
    ("DataTypeNode", 282),
    ("DataTypeSchemaHeader", 15534),
    ("DataTypeSystemType", 75),
    ("DataTypesFolder", 90),
    ("DataValue", 23),
    ("Date", 293),
    ("DateString", 12881),
    ("DateTime", 13),
    ("DeadbandType", 718),
    ("Decimal", 50),
    ("DecimalString", 12878),
    ("DeleteNodesItem", 382),
    ("DeleteReferencesItem", 385),
    ("DiagnosticInfo", 25),
    ("Double", 11),
    ("DoubleComplexNumberType", 12172),
    ("Duration", 290),
    ("DurationString", 12879),
    ("EUInformation", 887),
    ("ElementOperand", 592),
    ("EndpointConfiguration", 331),
    ("EndpointDescription", 312),
    ("EndpointType", 15528),
    ("EndpointUrlListDataType", 11943),
    ("EnumDefinition", 100),
    ("EnumDescription", 15488),
    ("EnumField", 102),
    ("EnumValueType", 7594),
    ("Enumeration", 29),
    ("EphemeralKeyType", 17548),
    ("EventFilter", 725),
    ("EventNotifierType", 15033),
    ("ExceptionDeviationFormat", 890),
    ("ExpandedNodeId", 18),
    ("FieldMetaData", 14524),
    ("FilterOperand", 589),
    ("FilterOperator", 576),
    ("Float", 10),
    ("FolderType", 61),
    ("Frame", 18813),
    ("FromState", 51),
    ("GeneratesEvent", 41),
    ("Guid", 14),
    ("HasAddIn", 17604),
    ("HasAlarmSuppressionGroup", 16361),
    ("HasArgumentDescription", 129),
    ("HasAttachedComponent", 25264),
    ("HasCause", 53),
    ("HasChild", 34),
    ("HasComponent", 47),
    ("HasCondition", 9006),
    ("HasContainedComponent", 25263),
    ("HasDataSetReader", 15297),
    ("HasDataSetWriter", 15296),
    ("HasDescription", 39),
    ("HasDictionaryEntry", 17597),
    ("HasEffect", 54),
    ("HasEffectDisable", 17276),
    ("HasEffectEnable", 17983),
    ("HasEffectSuppressed", 17984),
    ("HasEffectUnsuppressed", 17985),
    ("HasEncoding", 38),
    ("HasEventSource", 36),
    ("HasFalseSubState", 9005),
    ("HasGuard", 15112),
    ("HasHistoricalConfiguration", 56),
    ("HasInterface", 17603),
    ("HasLowerLayerInterface", 25238),
    ("HasModellingRule", 37),
    ("HasNotifier", 48),
    ("HasOptionalInputArgumentDescription", 131),
    ("HasOrderedComponent", 49),
    ("HasPhysicalComponent", 25262),
    ("HasProperty", 46),
    ("HasPubSubConnection", 14476),
    ("HasReaderGroup", 18805),
    ("HasStructuredComponent", 24136),
    ("HasSubStateMachine", 117),
    ("HasSubtype", 45),
    ("HasTrueSubState", 9004),
    ("HasTypeDefinition", 40),
    ("HasWriterGroup", 18804),
    ("HierarchicalReferences", 33),
    ("HistoryEvent", 659),
    ("HistoryUpdateType", 11234),
    ("IdType", 256),
    ("IdentityCriteriaType", 15632),
    ("IdentityMappingRuleType", 15634),
    ("Image", 30),
    ("ImageBMP", 2000),
    ("ImageGIF", 2001),
    ("ImageJPG", 2002),
    ("ImagePNG", 2003),
    ("Index", 17588),
    ("InstanceNode", 11879),
    ("Int16", 4),
    ("Int32", 6),
    ("Int64", 8),
    ("Integer", 27),
    ("IntegerId", 288),
    ("IsDeprecated", 23562),
    ("IsExecutableOn", 25253),
    ("IsExecutingOn", 25265),
    ("IsHostedBy", 25261),
    ("IsPhysicallyConnectedTo", 25257),
    ("IssuedIdentityToken", 938),
    ("KeyValuePair", 14533),
    ("LiteralOperand", 595),
    ("LocaleId", 295),
    ("LocalizedText", 21),
    ("MessageSecurityMode", 302),
    ("MethodNode", 276),
    ("ModelChangeStructureDataType", 877),
    ("ModelChangeStructureVerbMask", 11941),
    ("ModellingRuleType", 77),
    ("ModellingRule_ExposesItsArray", 83),
    ("ModellingRule_Mandatory", 78),
    ("ModellingRule_MandatoryPlaceholder", 11510),
    ("ModellingRule_Optional", 80),
    ("ModellingRule_OptionalPlaceholder", 11508),
    ("MonitoringFilter", 719),
    ("MonitoringMode", 716),
    ("MultiStateDiscreteType", 2376),
    ("MultiStateValueDiscreteType", 11238),
    ("NamespaceMetadataType", 11616),
    ("NamingRuleType", 120),
    ("NetworkGroupDataType", 11944),
    ("Node", 258),
    ("NodeAttributesMask", 348),
    ("NodeClass", 257),
    ("NodeId", 17),
    ("NonHierarchicalReferences", 32),
    ("NormalizedString", 12877),
    ("Number", 26),
    ("NumericRange", 291),
    ("OPCBinarySchema_TypeSystem", 93),
    ("ObjectNode", 261),
    ("ObjectTypeNode", 264),
    ("ObjectTypesFolder", 88),
    ("ObjectsFolder", 85),
    ("OpenFileMode", 11939),
    ("OptionSet", 12755),
    ("Organizes", 35),
    ("Orientation", 18811),
    ("PerformUpdateType", 11293),
    ("PermissionType", 94),
    ("ProgramDiagnosticDataType", 894),
    ("PropertyType", 68),
    ("PubSubState", 14647),
    ("QualifiedName", 20),
    ("Range", 884),
    ("RationalNumber", 18806),
    ("RedundancySupport", 851),
    ("RedundantServerDataType", 853),
    ("ReferenceDescription", 518),
    ("ReferenceNode", 285),
    ("ReferenceTypeNode", 273),
    ("ReferenceTypesFolder", 91),
    ("References", 31),
    ("RelativePath", 540),
    ("RelativePathElement", 537),
    ("RepresentsSameEntityAs", 25258),
    ("RepresentsSameFunctionalityAs", 25260),
    ("RepresentsSameHardwareAs", 25259),
    ("Requires", 25256),
    ("RolePermissionType", 96),
    ("RootFolder", 84),
    ("SByte", 2),
    ("SamplingIntervalDiagnosticsDataType", 856),
    ("SecurityTokenRequestType", 315),
    ("SemanticChangeStructureDataType", 897),
    ("Server", 2253),
    ("ServerCapabilitiesType", 2013),
    ("ServerDiagnosticsSummaryDataType", 859),
    ("ServerOnNetwork", 12189),
    ("ServerState", 852),
    ("ServerStatusDataType", 862),
    ("ServerType", 2004),
    ("ServiceCounterDataType", 871),
    ("SessionAuthenticationToken", 388),
    ("SessionDiagnosticsDataType", 865),
    ("SessionSecurityDiagnosticsDataType", 868),
    ("SignatureData", 456),
    ("SignedSoftwareCertificate", 344),
    ("SimpleAttributeOperand", 601),
    ("SimpleTypeDescription", 15005),
    ("StateMachineType", 2299),
    ("StateType", 2307),
    ("StatusCode", 19),
    ("StatusResult", 299),
    ("String", 12),
    ("Structure", 22),
    ("StructureDefinition", 99),
    ("StructureDescription", 15487),
    ("StructureField", 101),
    ("StructureType", 98),
    ("SubscriptionDiagnosticsDataType", 874),
    ("ThreeDCartesianCoordinates", 18810),
    ("ThreeDFrame", 18814),
    ("ThreeDOrientation", 18812),
    ("ThreeDVector", 18808),
    ("Time", 292),
    ("TimeString", 12880),
    ("TimeZoneDataType", 8912),
    ("TimestampsToReturn", 625),
    ("ToState", 52),
    ("TransitionType", 2310),
    ("TrustListDataType", 12554),
    ("TrustListMasks", 12552),
    ("TwoStateDiscreteType", 2373),
    ("TypeNode", 11880),
    ("TypesFolder", 86),
    ("UABinaryFileDataType", 15006),
    ("UInt16", 5),
    ("UInt32", 7),
    ("UInt64", 9),
    ("UInteger", 28),
    ("Union", 12756),
    ("UserIdentityToken", 316),
    ("UserNameIdentityToken", 322),
    ("UserTokenPolicy", 304),
    ("UserTokenType", 303),
    ("UsesPriorityMappingTable", 25237),
    ("UtcTime", 294),
    ("Utilizes", 25255),
    ("VariableNode", 267),
    ("VariableTypeNode", 270),
    ("VariableTypesFolder", 89),
    ("Vector", 18807),
    ("VersionTime", 20998),
    ("ViewDescription", 511),
    ("ViewNode", 279),
    ("ViewsFolder", 87),
    ("X509IdentityToken", 325),
    ("XVType", 12080),
    ("XmlElement", 16),
    ("XmlSchema_TypeSystem", 92),
];

/// Looks up a standard identifier by its exact, case-sensitive name.
pub fn lookup(name: &str) -> Option<NodeId> {
    WELL_KNOWN
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name))
        .ok()
        .map(|i| NodeId::numeric(0, WELL_KNOWN[i].1))
}

/// Iterates all registered names with their identifiers, in name order.
pub fn entries() -> impl Iterator<Item = (&'static str, NodeId)> {
    WELL_KNOWN
        .iter()
        .map(|(name, id)| (*name, NodeId::numeric(0, *id)))
}
