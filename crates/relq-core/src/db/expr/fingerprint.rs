use crate::{
    db::expr::{DbColumn, DbExpr, DbTable},
    model::field::FieldKind,
    value::Value,
};
use sha2::{Digest, Sha256};

///
/// CONSTANTS
///

const FINGERPRINT_VERSION: u8 = 0x01;

impl DbExpr {
    /// Stable SHA-256 fingerprint of the tree structure and literals.
    ///
    /// Two trees fingerprint equally iff they are structurally equal, up to
    /// hash collision. The encoding is versioned; bump `FINGERPRINT_VERSION`
    /// whenever it changes so stale cache entries miss.
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        write_tag(&mut hasher, FINGERPRINT_VERSION);
        hash_expr(&mut hasher, self);

        hasher.finalize().into()
    }
}

fn hash_expr(hasher: &mut Sha256, expr: &DbExpr) {
    match expr {
        DbExpr::ColumnAccess { table, column } => {
            write_tag(hasher, 0x10);
            hash_table(hasher, table);
            hash_column(hasher, column);
        }
        DbExpr::Parameter { value, kind } => {
            write_tag(hasher, 0x11);
            hash_value(hasher, value);
            hash_kind(hasher, *kind);
        }
        DbExpr::Equal(left, right) => {
            write_tag(hasher, 0x12);
            hash_expr(hasher, left);
            hash_expr(hasher, right);
        }
        DbExpr::And(left, right) => {
            write_tag(hasher, 0x13);
            hash_expr(hasher, left);
            hash_expr(hasher, right);
        }
    }
}

fn hash_table(hasher: &mut Sha256, table: &DbTable) {
    write_str(hasher, &table.name);
    match &table.schema {
        Some(schema) => {
            write_tag(hasher, 0x01);
            write_str(hasher, schema);
        }
        None => write_tag(hasher, 0x00),
    }
}

fn hash_column(hasher: &mut Sha256, column: &DbColumn) {
    write_str(hasher, &column.name);
    hash_kind(hasher, column.kind);
}

fn hash_kind(hasher: &mut Sha256, kind: FieldKind) {
    let tag = match kind {
        FieldKind::Bool => 0x20,
        FieldKind::Int8 => 0x21,
        FieldKind::Int16 => 0x22,
        FieldKind::Int32 => 0x23,
        FieldKind::Int64 => 0x24,
        FieldKind::Uint8 => 0x25,
        FieldKind::Uint16 => 0x26,
        FieldKind::Uint32 => 0x27,
        FieldKind::Uint64 => 0x28,
        FieldKind::Float64 => 0x29,
        FieldKind::Text => 0x2a,
        FieldKind::Ulid => 0x2b,
        FieldKind::Enum(model) => {
            write_tag(hasher, 0x2c);
            write_str(hasher, model.path);
            return;
        }
    };
    write_tag(hasher, tag);
}

fn hash_value(hasher: &mut Sha256, value: &Value) {
    match value {
        Value::Bool(v) => {
            write_tag(hasher, 0x30);
            write_tag(hasher, u8::from(*v));
        }
        Value::Enum(v) => {
            write_tag(hasher, 0x31);
            write_str(hasher, &v.variant);
            match &v.path {
                Some(path) => {
                    write_tag(hasher, 0x01);
                    write_str(hasher, path);
                }
                None => write_tag(hasher, 0x00),
            }
        }
        Value::Float64(v) => {
            write_tag(hasher, 0x32);
            hasher.update(v.to_be_bytes());
        }
        Value::Int8(v) => write_int(hasher, 0x33, i128::from(*v)),
        Value::Int16(v) => write_int(hasher, 0x34, i128::from(*v)),
        Value::Int32(v) => write_int(hasher, 0x35, i128::from(*v)),
        Value::Int64(v) => write_int(hasher, 0x36, i128::from(*v)),
        Value::Null => write_tag(hasher, 0x37),
        Value::Text(v) => {
            write_tag(hasher, 0x38);
            write_str(hasher, v);
        }
        Value::Uint8(v) => write_int(hasher, 0x39, i128::from(*v)),
        Value::Uint16(v) => write_int(hasher, 0x3a, i128::from(*v)),
        Value::Uint32(v) => write_int(hasher, 0x3b, i128::from(*v)),
        Value::Uint64(v) => write_int(hasher, 0x3c, i128::from(*v)),
        Value::Ulid(v) => {
            write_tag(hasher, 0x3d);
            hasher.update(u128::from(*v).to_be_bytes());
        }
    }
}

// Integers are tagged by declared width so Int32(1) and Int64(1) differ.
fn write_int(hasher: &mut Sha256, tag: u8, value: i128) {
    write_tag(hasher, tag);
    hasher.update(value.to_be_bytes());
}

///
/// Encode one string with length prefix into the fingerprint stream.
///

fn write_str(hasher: &mut Sha256, value: &str) {
    write_len_u32(hasher, value.len());
    hasher.update(value.as_bytes());
}

/// Encode a platform-sized length as u32 with deterministic saturation.
fn write_len_u32(hasher: &mut Sha256, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}
