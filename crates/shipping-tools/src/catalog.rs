//! The fixed catalog of shipping tools.
//!
//! Each [`ToolDescriptor`] pairs a parameter schema with the backend endpoint it calls and the
//! field-mapping table used to build the backend request.

use crate::schema::{DefaultValue, ParamKind, ParamSpec};
use crate::translate::FieldMap;
use reqwest::Method;

/// Name of the per-call credential override accepted by every tool.
pub const INTEGRATION_KEY_PARAM: &str = "integration_key";

/// Where translated fields end up in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Query string (GET endpoints).
    Query,
    /// Top-level JSON body fields.
    Body,
    /// JSON body with the fields nested under `meta`.
    MetaBody,
}

#[derive(Debug)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    /// Fixed `action` discriminator for multiplexed endpoints.
    pub action: Option<&'static str>,
    pub payload: Payload,
    /// Removes or invalidates backend records.
    pub destructive: bool,
    pub params: &'static [ParamSpec],
    pub mapping: &'static [FieldMap],
}

/// Look up a tool by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|t| t.name == name)
}

const ADDRESS: &[ParamSpec] = &[
    ParamSpec::required("name", ParamKind::String, "Contact name"),
    ParamSpec::optional("company", ParamKind::String, "Company name"),
    ParamSpec::required("address1", ParamKind::String, "Street address line 1"),
    ParamSpec::optional("address2", ParamKind::String, "Street address line 2"),
    ParamSpec::required("city", ParamKind::String, "City"),
    ParamSpec::optional("state", ParamKind::String, "State or province code"),
    ParamSpec::required("postal", ParamKind::String, "Postal / ZIP code"),
    ParamSpec::required("country", ParamKind::String, "ISO country code, e.g. US"),
    ParamSpec::optional("phone", ParamKind::String, "Phone number"),
    ParamSpec::optional("email", ParamKind::String, "Email address"),
];

/// Address fields in backend order; flattened with a per-role prefix.
const ADDRESS_FIELDS: &[&str] = &[
    "name", "company", "address1", "address2", "city", "state", "postal", "country", "phone",
    "email",
];

const ADDRESS_KIND: ParamKind = ParamKind::Object(ADDRESS);

const PRODUCT: &[ParamSpec] = &[
    ParamSpec::optional("name", ParamKind::String, "Product description"),
    ParamSpec::required("weight", ParamKind::Number, "Weight per unit"),
    ParamSpec::optional("quantity", ParamKind::Integer, "Number of units")
        .with_default(DefaultValue::Int(1)),
    ParamSpec::optional("price", ParamKind::Number, "Declared value per unit")
        .with_default(DefaultValue::Int(0)),
    ParamSpec::optional("length", ParamKind::Number, "Package length")
        .with_default(DefaultValue::Int(1)),
    ParamSpec::optional("width", ParamKind::Number, "Package width")
        .with_default(DefaultValue::Int(1)),
    ParamSpec::optional("height", ParamKind::Number, "Package height")
        .with_default(DefaultValue::Int(1)),
];

const PRODUCT_FIELDS: &[(&str, &str)] = &[
    ("name", "prod_name"),
    ("weight", "prod_weight"),
    ("quantity", "prod_quantity"),
    ("price", "prod_price"),
    ("length", "prod_depth"),
    ("width", "prod_width"),
    ("height", "prod_height"),
];

const PRODUCT_KIND: ParamKind = ParamKind::Object(PRODUCT);
const ID_KIND: ParamKind = ParamKind::Identifier;

const PAGE: ParamSpec =
    ParamSpec::optional("page", ParamKind::Integer, "Page number").with_default(DefaultValue::Int(1));

const LIST_SHIPMENTS: &[ParamSpec] = &[
    PAGE,
    ParamSpec::optional("per_page", ParamKind::Integer, "Results per page")
        .with_default(DefaultValue::Int(20)),
    ParamSpec::optional(
        "status",
        ParamKind::String,
        "Filter by status (e.g. pending, shipped, delivered, cancelled)",
    ),
    ParamSpec::optional("carrier_id", ParamKind::Identifier, "Filter by carrier account"),
    ParamSpec::optional("date_from", ParamKind::String, "Created on or after (YYYY-MM-DD)"),
    ParamSpec::optional("date_to", ParamKind::String, "Created on or before (YYYY-MM-DD)"),
];

const GET_SHIPMENT: &[ParamSpec] = &[ParamSpec::required(
    "shipment_id",
    ParamKind::Identifier,
    "Shipment ID",
)];

const SEARCH_SHIPMENTS: &[ParamSpec] = &[
    ParamSpec::required(
        "q",
        ParamKind::String,
        "Search text (tracking number, recipient name, reference, ...)",
    ),
    PAGE,
];

const CREATE_SHIPMENT: &[ParamSpec] = &[
    ParamSpec::required("carrier_id", ParamKind::Identifier, "Carrier account to ship with"),
    ParamSpec::optional("service", ParamKind::String, "Carrier service code"),
    ParamSpec::required("shipper", ADDRESS_KIND, "Ship-from address"),
    ParamSpec::required("recipient", ADDRESS_KIND, "Ship-to address"),
    ParamSpec::required(
        "products",
        ParamKind::Array(&PRODUCT_KIND),
        "Packages / products in the shipment",
    ),
    ParamSpec::optional("package_type", ParamKind::String, "Carrier packaging code"),
    ParamSpec::optional("reference", ParamKind::String, "Your order or reference number"),
    ParamSpec::optional("ship_date", ParamKind::String, "Ship date (YYYY-MM-DD)"),
    ParamSpec::optional("signature", ParamKind::Boolean, "Require signature on delivery"),
    ParamSpec::optional("insurance", ParamKind::Boolean, "Insure declared value"),
    ParamSpec::optional("label_format", ParamKind::String, "Label format (e.g. pdf, zpl)"),
    ParamSpec::optional("notes", ParamKind::String, "Free-form shipment notes"),
];

const CANCEL_SHIPMENT: &[ParamSpec] = &[ParamSpec::required(
    "shipment_id",
    ParamKind::Identifier,
    "Shipment ID to cancel",
)];

const SHIPPING_RATES: &[ParamSpec] = &[
    ParamSpec::required("shipper", ADDRESS_KIND, "Ship-from address"),
    ParamSpec::required("recipient", ADDRESS_KIND, "Ship-to address"),
    ParamSpec::required(
        "products",
        ParamKind::Array(&PRODUCT_KIND),
        "Packages / products to rate",
    ),
    ParamSpec::optional(
        "carrier_id",
        ParamKind::Identifier,
        "Limit rates to one carrier account",
    ),
    ParamSpec::optional("service", ParamKind::String, "Limit rates to one service code"),
    ParamSpec::optional("ship_date", ParamKind::String, "Ship date (YYYY-MM-DD)"),
];

const SCHEDULE_PICKUP: &[ParamSpec] = &[
    ParamSpec::required("carrier_id", ParamKind::Identifier, "Carrier account"),
    ParamSpec::required("pickup_date", ParamKind::String, "Pickup date (YYYY-MM-DD)"),
    ParamSpec::optional("ready_time", ParamKind::String, "Earliest pickup time (HH:MM)")
        .with_default(DefaultValue::Str("09:00")),
    ParamSpec::optional("close_time", ParamKind::String, "Latest pickup time (HH:MM)")
        .with_default(DefaultValue::Str("17:00")),
    ParamSpec::optional(
        "shipment_ids",
        ParamKind::Array(&ID_KIND),
        "Shipments to include in the pickup",
    ),
    ParamSpec::optional("packages", ParamKind::Integer, "Number of packages")
        .with_default(DefaultValue::Int(1)),
    ParamSpec::optional("address", ADDRESS_KIND, "Pickup address (defaults to account address)"),
    ParamSpec::optional("instructions", ParamKind::String, "Instructions for the driver"),
];

const TRACK_SHIPMENT: &[ParamSpec] = &[
    ParamSpec::required("tracking_number", ParamKind::String, "Carrier tracking number"),
    ParamSpec::optional("carrier", ParamKind::String, "Carrier code, if known"),
];

const FETCH_LABELS: &[ParamSpec] = &[
    ParamSpec::optional(
        "printed",
        ParamKind::String,
        "Which labels to return: all, printed or unprinted",
    )
    .with_default(DefaultValue::Str("all")),
    ParamSpec::optional("shipment_id", ParamKind::Identifier, "Only labels for this shipment"),
    ParamSpec::optional("format", ParamKind::String, "Label format (e.g. pdf, zpl)"),
    ParamSpec::optional("date_from", ParamKind::String, "Created on or after (YYYY-MM-DD)"),
    ParamSpec::optional("date_to", ParamKind::String, "Created on or before (YYYY-MM-DD)"),
    PAGE,
];

const LIST_ADDRESSES: &[ParamSpec] = &[
    PAGE,
    ParamSpec::optional("search", ParamKind::String, "Filter by name, company or city"),
];

const ADDRESS_ID: ParamSpec =
    ParamSpec::required("address_id", ParamKind::Identifier, "Address book record ID");

const GET_ADDRESS: &[ParamSpec] = &[ADDRESS_ID];

const ADD_ADDRESS: &[ParamSpec] = &[
    ParamSpec::required("name", ParamKind::String, "Contact name"),
    ParamSpec::optional("company", ParamKind::String, "Company name"),
    ParamSpec::required("address1", ParamKind::String, "Street address line 1"),
    ParamSpec::optional("address2", ParamKind::String, "Street address line 2"),
    ParamSpec::required("city", ParamKind::String, "City"),
    ParamSpec::optional("state", ParamKind::String, "State or province code"),
    ParamSpec::required("postal", ParamKind::String, "Postal / ZIP code"),
    ParamSpec::required("country", ParamKind::String, "ISO country code, e.g. US"),
    ParamSpec::optional("phone", ParamKind::String, "Phone number"),
    ParamSpec::optional("email", ParamKind::String, "Email address"),
    ParamSpec::optional("is_default", ParamKind::Boolean, "Use as the default ship-from address"),
];

const EDIT_ADDRESS: &[ParamSpec] = &[
    ADDRESS_ID,
    ParamSpec::optional("name", ParamKind::String, "Contact name"),
    ParamSpec::optional("company", ParamKind::String, "Company name"),
    ParamSpec::optional("address1", ParamKind::String, "Street address line 1"),
    ParamSpec::optional("address2", ParamKind::String, "Street address line 2"),
    ParamSpec::optional("city", ParamKind::String, "City"),
    ParamSpec::optional("state", ParamKind::String, "State or province code"),
    ParamSpec::optional("postal", ParamKind::String, "Postal / ZIP code"),
    ParamSpec::optional("country", ParamKind::String, "ISO country code"),
    ParamSpec::optional("phone", ParamKind::String, "Phone number"),
    ParamSpec::optional("email", ParamKind::String, "Email address"),
    ParamSpec::optional("is_default", ParamKind::Boolean, "Use as the default ship-from address"),
];

const DELETE_ADDRESS: &[ParamSpec] = &[ADDRESS_ID];

const GET_CARRIER: &[ParamSpec] = &[ParamSpec::required(
    "carrier_id",
    ParamKind::Identifier,
    "Carrier account ID",
)];

const SHIPPING_STATS: &[ParamSpec] = &[
    ParamSpec::optional(
        "period",
        ParamKind::String,
        "Reporting period: day, week, month or year",
    )
    .with_default(DefaultValue::Str("month")),
    ParamSpec::optional("carrier_id", ParamKind::Identifier, "Only count this carrier account"),
];

const ADDRESS_RECORD_MAPPING: &[FieldMap] = &[
    FieldMap::rename("address_id", "id"),
    FieldMap::rename("name", "name"),
    FieldMap::rename("company", "company"),
    FieldMap::rename("address1", "address1"),
    FieldMap::rename("address2", "address2"),
    FieldMap::rename("city", "city"),
    FieldMap::rename("state", "state"),
    FieldMap::rename("postal", "postal"),
    FieldMap::rename("country", "country"),
    FieldMap::rename("phone", "phone"),
    FieldMap::rename("email", "email"),
    FieldMap::rename("is_default", "default"),
];

pub static CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "list_shipments",
        description: "List shipments on the account, newest first, with optional status, carrier and date filters.",
        method: Method::GET,
        path: "/shipments",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: LIST_SHIPMENTS,
        mapping: &[
            FieldMap::rename("page", "page"),
            FieldMap::rename("per_page", "limit"),
            FieldMap::rename("status", "status"),
            FieldMap::rename("carrier_id", "carrier"),
            FieldMap::rename("date_from", "from"),
            FieldMap::rename("date_to", "to"),
        ],
    },
    ToolDescriptor {
        name: "get_shipment",
        description: "Get full details of one shipment, including addresses, packages, tracking and label status.",
        method: Method::GET,
        path: "/shipments/view",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: GET_SHIPMENT,
        mapping: &[FieldMap::rename("shipment_id", "id")],
    },
    ToolDescriptor {
        name: "search_shipments",
        description: "Search shipments by tracking number, recipient, reference or other text.",
        method: Method::GET,
        path: "/shipments/search",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: SEARCH_SHIPMENTS,
        mapping: &[FieldMap::rename("q", "q"), FieldMap::rename("page", "page")],
    },
    ToolDescriptor {
        name: "create_shipment",
        description: "Create a shipment and buy its label with the given carrier account. Returns the shipment, tracking number and label.",
        method: Method::POST,
        path: "/label",
        action: None,
        payload: Payload::MetaBody,
        destructive: false,
        params: CREATE_SHIPMENT,
        mapping: &[
            FieldMap::rename("carrier_id", "carrier_id"),
            FieldMap::rename("service", "service"),
            FieldMap::flatten("shipper", "s_", ADDRESS_FIELDS),
            FieldMap::flatten("recipient", "t_", ADDRESS_FIELDS),
            FieldMap::each("products", "products", PRODUCT_FIELDS),
            FieldMap::rename("package_type", "package"),
            FieldMap::rename("reference", "ref"),
            FieldMap::rename("ship_date", "ship_date"),
            FieldMap::rename("signature", "signature"),
            FieldMap::rename("insurance", "insurance"),
            FieldMap::rename("label_format", "label_format"),
            FieldMap::rename("notes", "notes"),
        ],
    },
    ToolDescriptor {
        name: "cancel_shipment",
        description: "Cancel a shipment and void its label.",
        method: Method::POST,
        path: "/shipments/delete",
        action: None,
        payload: Payload::Body,
        destructive: true,
        params: CANCEL_SHIPMENT,
        mapping: &[FieldMap::rename("shipment_id", "del_ref")],
    },
    ToolDescriptor {
        name: "get_shipping_rates",
        description: "Quote shipping rates across the account's carriers for the given addresses and packages.",
        method: Method::POST,
        path: "/rates",
        action: None,
        payload: Payload::MetaBody,
        destructive: false,
        params: SHIPPING_RATES,
        mapping: &[
            FieldMap::flatten("shipper", "s_", ADDRESS_FIELDS),
            FieldMap::flatten("recipient", "t_", ADDRESS_FIELDS),
            FieldMap::each("products", "products", PRODUCT_FIELDS),
            FieldMap::rename("carrier_id", "carrier_id"),
            FieldMap::rename("service", "service"),
            FieldMap::rename("ship_date", "ship_date"),
        ],
    },
    ToolDescriptor {
        name: "schedule_pickup",
        description: "Schedule a carrier pickup for one or more shipments.",
        method: Method::POST,
        path: "/pickup",
        action: None,
        payload: Payload::Body,
        destructive: false,
        params: SCHEDULE_PICKUP,
        mapping: &[
            FieldMap::rename("carrier_id", "carrier_id"),
            FieldMap::rename("pickup_date", "date"),
            FieldMap::rename("ready_time", "ready"),
            FieldMap::rename("close_time", "close"),
            FieldMap::rename("shipment_ids", "shipments"),
            FieldMap::rename("packages", "packages"),
            FieldMap::flatten("address", "p_", ADDRESS_FIELDS),
            FieldMap::rename("instructions", "instructions"),
        ],
    },
    ToolDescriptor {
        name: "track_shipment",
        description: "Get the carrier tracking URL and latest status for a tracking number.",
        method: Method::GET,
        path: "/tracking",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: TRACK_SHIPMENT,
        mapping: &[
            FieldMap::rename("tracking_number", "tracking"),
            FieldMap::rename("carrier", "carrier"),
        ],
    },
    ToolDescriptor {
        name: "fetch_labels",
        description: "Fetch generated shipping labels, optionally only printed or unprinted ones.",
        method: Method::GET,
        path: "/labels",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: FETCH_LABELS,
        mapping: &[
            FieldMap::rename("printed", "printed"),
            FieldMap::rename("shipment_id", "id"),
            FieldMap::rename("format", "format"),
            FieldMap::rename("date_from", "from"),
            FieldMap::rename("date_to", "to"),
            FieldMap::rename("page", "page"),
        ],
    },
    ToolDescriptor {
        name: "list_addresses",
        description: "List saved address book entries.",
        method: Method::GET,
        path: "/address-book",
        action: Some("list"),
        payload: Payload::Query,
        destructive: false,
        params: LIST_ADDRESSES,
        mapping: &[FieldMap::rename("page", "page"), FieldMap::rename("search", "q")],
    },
    ToolDescriptor {
        name: "get_address",
        description: "Get one address book entry.",
        method: Method::GET,
        path: "/address-book",
        action: Some("get"),
        payload: Payload::Query,
        destructive: false,
        params: GET_ADDRESS,
        mapping: &[FieldMap::rename("address_id", "id")],
    },
    ToolDescriptor {
        name: "add_address",
        description: "Save a new address to the address book.",
        method: Method::POST,
        path: "/address-book",
        action: Some("add"),
        payload: Payload::Body,
        destructive: false,
        params: ADD_ADDRESS,
        mapping: ADDRESS_RECORD_MAPPING,
    },
    ToolDescriptor {
        name: "edit_address",
        description: "Update fields of an existing address book entry. Omitted fields are left unchanged.",
        method: Method::POST,
        path: "/address-book",
        action: Some("edit"),
        payload: Payload::Body,
        destructive: false,
        params: EDIT_ADDRESS,
        mapping: ADDRESS_RECORD_MAPPING,
    },
    ToolDescriptor {
        name: "delete_address",
        description: "Delete an address book entry.",
        method: Method::POST,
        path: "/address-book",
        action: Some("delete"),
        payload: Payload::Body,
        destructive: true,
        params: DELETE_ADDRESS,
        mapping: &[FieldMap::rename("address_id", "id")],
    },
    ToolDescriptor {
        name: "list_carriers",
        description: "List the carrier accounts connected to this account.",
        method: Method::GET,
        path: "/carriers",
        action: Some("list"),
        payload: Payload::Query,
        destructive: false,
        params: &[],
        mapping: &[],
    },
    ToolDescriptor {
        name: "get_carrier",
        description: "Get one carrier account, including its available services.",
        method: Method::GET,
        path: "/carriers",
        action: Some("get"),
        payload: Payload::Query,
        destructive: false,
        params: GET_CARRIER,
        mapping: &[FieldMap::rename("carrier_id", "id")],
    },
    ToolDescriptor {
        name: "get_account_info",
        description: "Get account details such as company, plan and balance.",
        method: Method::GET,
        path: "/account",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: &[],
        mapping: &[],
    },
    ToolDescriptor {
        name: "get_shipping_stats",
        description: "Get shipment counts and spend for a reporting period.",
        method: Method::GET,
        path: "/stats",
        action: None,
        payload: Payload::Query,
        destructive: false,
        params: SHIPPING_STATS,
        mapping: &[
            FieldMap::rename("period", "period"),
            FieldMap::rename("carrier_id", "carrier"),
        ],
    },
];
