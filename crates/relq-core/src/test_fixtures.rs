use crate::{
    model::{
        entity::EntityModel,
        field::{EntityFieldModel, EnumModel, FieldKind},
        key::PrimaryKeyModel,
    },
    query::predicate::{FieldPresence, Row},
    traits::EntityKind,
    value::Value,
};
use std::collections::BTreeMap;

///
/// Models
///

pub(crate) static ROLE: EnumModel = EnumModel {
    path: "fixtures::Role",
    variants: &[("Owner", 1), ("Member", 2), ("Guest", 3)],
};

pub(crate) static USER: EntityModel = EntityModel {
    path: "fixtures::User",
    entity_name: "User",
    table: "users",
    primary_keys: &[PrimaryKeyModel::new("id", FieldKind::Int64, "Id")],
    fields: &[
        EntityFieldModel::new("name", FieldKind::Text),
        EntityFieldModel::new("city_id", FieldKind::Int64),
        EntityFieldModel::new("active", FieldKind::Bool),
    ],
};

pub(crate) static CITY: EntityModel = EntityModel {
    path: "fixtures::City",
    entity_name: "City",
    table: "cities",
    primary_keys: &[PrimaryKeyModel::new("id", FieldKind::Int64, "Id")],
    fields: &[
        EntityFieldModel::new("name", FieldKind::Text),
        EntityFieldModel::new("province_id", FieldKind::Int64),
    ],
};

pub(crate) static PROVINCE: EntityModel = EntityModel {
    path: "fixtures::Province",
    entity_name: "Province",
    table: "provinces",
    primary_keys: &[PrimaryKeyModel::new("id", FieldKind::Int64, "Id")],
    fields: &[EntityFieldModel::new("name", FieldKind::Text)],
};

pub(crate) static ORDER_LINE: EntityModel = EntityModel {
    path: "fixtures::OrderLine",
    entity_name: "OrderLine",
    table: "order_lines",
    primary_keys: &[
        PrimaryKeyModel::new("order_id", FieldKind::Int64, "OrderId"),
        PrimaryKeyModel::new("line_no", FieldKind::Int32, "LineNo"),
    ],
    fields: &[EntityFieldModel::new("sku", FieldKind::Text)],
};

pub(crate) static MEMBERSHIP: EntityModel = EntityModel {
    path: "fixtures::Membership",
    entity_name: "Membership",
    table: "memberships",
    primary_keys: &[
        PrimaryKeyModel::new("group", FieldKind::Text, "GroupName"),
        PrimaryKeyModel::new("user_id", FieldKind::Int64, "UserId"),
        PrimaryKeyModel::new("role", FieldKind::Enum(&ROLE), "Role"),
    ],
    fields: &[],
};

pub(crate) static AUDIT_LOG: EntityModel = EntityModel {
    path: "fixtures::AuditLog",
    entity_name: "AuditLog",
    table: "audit_log",
    primary_keys: &[],
    fields: &[EntityFieldModel::new("message", FieldKind::Text)],
};

///
/// Entity kinds
///

pub(crate) struct User;

impl EntityKind for User {
    const MODEL: &'static EntityModel = &USER;
}

pub(crate) struct OrderLine;

impl EntityKind for OrderLine {
    const MODEL: &'static EntityModel = &ORDER_LINE;
}

///
/// TestRow
///

#[derive(Clone, Debug, Default)]
pub(crate) struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl TestRow {
    pub(crate) fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }
}

impl Row for TestRow {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}
