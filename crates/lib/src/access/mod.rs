//! Single-segment access over polymorphic containers.
//!
//! This is the dispatch layer underneath every path operation. Given a container and one
//! segment it either reads the child ([`read_segment`]) or stores a new child
//! ([`write_segment`]), choosing the behaviour from the container's runtime shape:
//!
//! | Shape    | Read                                   | Write                         |
//! |----------|----------------------------------------|-------------------------------|
//! | null     | `None`                                 | [`AccessError::UnsupportedContainer`] |
//! | mapping  | keyed lookup, missing/null is `None`   | insert or overwrite           |
//! | record   | case-insensitive field lookup          | typed field assignment        |
//! | sequence | the sequence itself                    | [`AccessError::UnsupportedContainer`] |
//! | scalar   | [`AccessError::UnsupportedContainer`]  | [`AccessError::UnsupportedContainer`] |
//!
//! Reads go through [`Node`], a borrowed-or-owned view: mapping children are borrowed while
//! record fields are owned snapshots. Writes go through [`Slot`], an exclusive borrow of the
//! container being modified.

use crate::{
    map::Map,
    record::{Record, find_field},
    value::Value,
};

pub mod errors;


pub use errors::AccessError;

/// Read-side view of a value during traversal.
#[derive(Debug, Clone)]
pub enum Node<'a> {
    /// A value borrowed from the aggregate
    Value(&'a Value),
    /// A snapshot produced by a record field read
    Owned(Value),
    /// A root mapping
    Map(&'a Map),
    /// A root record
    Record(&'a dyn Record),
}

impl<'a> Node<'a> {
    /// Returns the node as a [`Value`] reference when it is one.
    ///
    /// Root mappings and records return `None`; they are never coercible scalars.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            Node::Owned(value) => Some(value),
            Node::Map(_) | Node::Record(_) => None,
        }
    }

    /// Returns true if the node is a null value
    pub fn is_null(&self) -> bool {
        self.as_value().is_some_and(Value::is_null)
    }

    /// Converts the node into an owned [`Value`], cloning borrowed data.
    pub fn into_value(self) -> Value {
        match self {
            Node::Value(value) => value.clone(),
            Node::Owned(value) => value,
            Node::Map(map) => Value::Map(map.clone()),
            Node::Record(record) => Value::Record(record.clone_record()),
        }
    }

    /// Borrows the node again without cloning owned snapshots.
    pub fn reborrow(&self) -> Node<'_> {
        match self {
            Node::Value(value) => Node::Value(value),
            Node::Owned(value) => Node::Value(value),
            Node::Map(map) => Node::Map(map),
            Node::Record(record) => Node::Record(*record),
        }
    }

    fn into_owned(self) -> Node<'static> {
        Node::Owned(self.into_value())
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        Node::Value(value)
    }
}

impl<'a> From<&'a Map> for Node<'a> {
    fn from(map: &'a Map) -> Self {
        Node::Map(map)
    }
}

impl<'a> From<&'a dyn Record> for Node<'a> {
    fn from(record: &'a dyn Record) -> Self {
        Node::Record(record)
    }
}

impl<'a, R: Record> From<&'a R> for Node<'a> {
    fn from(record: &'a R) -> Self {
        Node::Record(record)
    }
}

/// Write-side handle to a container.
///
/// Holding a `Slot` means holding the only mutable path to the container, which is what
/// makes a record addressable.
#[derive(Debug)]
pub enum Slot<'a> {
    /// A value inside the aggregate, or a root value
    Value(&'a mut Value),
    /// A root mapping, or a mapping-typed record field
    Map(&'a mut Map),
    /// A root record, or a record-typed field of another record
    Record(&'a mut dyn Record),
}

impl Slot<'_> {
    /// Shared view of the slot for reading.
    pub fn as_node(&self) -> Node<'_> {
        match self {
            Slot::Value(value) => Node::Value(value),
            Slot::Map(map) => Node::Map(map),
            Slot::Record(record) => Node::Record(&**record),
        }
    }

    /// Returns true if the slot holds a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Slot::Value(value) if value.is_null())
    }

    /// Shorter-lived handle to the same container, for repeated writes through one slot.
    pub fn reborrow(&mut self) -> Slot<'_> {
        match self {
            Slot::Value(value) => Slot::Value(value),
            Slot::Map(map) => Slot::Map(map),
            Slot::Record(record) => Slot::Record(&mut **record),
        }
    }
}

impl<'a> From<&'a mut Value> for Slot<'a> {
    fn from(value: &'a mut Value) -> Self {
        Slot::Value(value)
    }
}

impl<'a> From<&'a mut Map> for Slot<'a> {
    fn from(map: &'a mut Map) -> Self {
        Slot::Map(map)
    }
}

impl<'a> From<&'a mut dyn Record> for Slot<'a> {
    fn from(record: &'a mut dyn Record) -> Self {
        Slot::Record(record)
    }
}

impl<'a, R: Record> From<&'a mut R> for Slot<'a> {
    fn from(record: &'a mut R) -> Self {
        Slot::Record(record)
    }
}

/// Named policy: sequences are not indexable by this path syntax.
///
/// Any segment applied to a sequence yields the sequence itself, so a path that runs
/// through a sequence stops descending and resolves to the whole sequence.
fn opaque_sequence(sequence: &Value) -> Node<'_> {
    Node::Value(sequence)
}

/// Reads the child addressed by `segment`.
///
/// Returns `Ok(None)` for a null container, a missing mapping key, or a field holding null.
///
/// # Errors
/// - [`AccessError::FieldNotFound`] when a record has no such field.
/// - [`AccessError::UnsupportedContainer`] when the container is a scalar.
pub fn read_segment<'a>(node: Node<'a>, segment: &str) -> Result<Option<Node<'a>>, AccessError> {
    match node {
        Node::Value(value) => read_value(value, segment),
        Node::Owned(value) => Ok(read_value(&value, segment)?.map(Node::into_owned)),
        Node::Map(map) => Ok(read_map(map, segment)),
        Node::Record(record) => read_record(record, segment),
    }
}

fn read_value<'a>(value: &'a Value, segment: &str) -> Result<Option<Node<'a>>, AccessError> {
    match value {
        Value::Null => Ok(None),
        Value::Map(map) => Ok(read_map(map, segment)),
        Value::Record(record) => read_record(record.as_ref(), segment),
        Value::List(_) => Ok(Some(opaque_sequence(value))),
        scalar => Err(AccessError::UnsupportedContainer {
            segment: segment.to_string(),
            kind: scalar.type_name().to_string(),
        }),
    }
}

fn read_map<'a>(map: &'a Map, segment: &str) -> Option<Node<'a>> {
    map.get(segment)
        .filter(|value| !value.is_null())
        .map(Node::Value)
}

fn read_record<'a>(record: &'a dyn Record, segment: &str) -> Result<Option<Node<'a>>, AccessError> {
    let name = find_field(record, segment).ok_or_else(|| AccessError::FieldNotFound {
        field: segment.to_string(),
    })?;

    Ok(record
        .read_field(name)
        .filter(|value| !value.is_null())
        .map(Node::Owned))
}

/// Stores `value` as the child addressed by `segment`.
///
/// # Errors
/// - [`AccessError::FieldNotFound`] when a record has no such field.
/// - [`AccessError::TypeMismatch`] when a record field rejects the value.
/// - [`AccessError::UnsupportedContainer`] for anything that is not a mapping or record.
pub fn write_segment(slot: &mut Slot<'_>, segment: &str, value: Value) -> Result<(), AccessError> {
    match slot {
        Slot::Map(map) => {
            map.insert(segment, value);
            Ok(())
        }
        Slot::Record(record) => write_record(&mut **record, segment, value),
        Slot::Value(target) => match &mut **target {
            Value::Map(map) => {
                map.insert(segment, value);
                Ok(())
            }
            Value::Record(record) => write_record(record.as_mut(), segment, value),
            other => Err(AccessError::UnsupportedContainer {
                segment: segment.to_string(),
                kind: other.type_name().to_string(),
            }),
        },
    }
}

fn write_record(record: &mut dyn Record, segment: &str, value: Value) -> Result<(), AccessError> {
    let name = find_field(record, segment).ok_or_else(|| AccessError::FieldNotFound {
        field: segment.to_string(),
    })?;
    record.write_field(name, value)
}

/// Moves a write handle down to the child addressed by `segment`.
///
/// The child must already be present; callers check with [`read_segment`] first. A
/// sequence hands back itself, following the opaque-sequence policy.
///
/// # Errors
/// - [`AccessError::NotAddressable`] when the child exists only as a snapshot copy.
/// - [`AccessError::FieldNotFound`] / [`AccessError::UnsupportedContainer`] as for reads.
pub fn descend_mut<'a>(slot: Slot<'a>, segment: &str) -> Result<Slot<'a>, AccessError> {
    match slot {
        Slot::Map(map) => descend_map(map, segment),
        Slot::Record(record) => descend_record(record, segment),
        Slot::Value(value) => {
            if value.is_list() {
                return Ok(Slot::Value(value));
            }
            match value {
                Value::Map(map) => descend_map(map, segment),
                Value::Record(record) => descend_record(record.as_mut(), segment),
                other => Err(AccessError::UnsupportedContainer {
                    segment: segment.to_string(),
                    kind: other.type_name().to_string(),
                }),
            }
        }
    }
}

fn descend_map<'a>(map: &'a mut Map, segment: &str) -> Result<Slot<'a>, AccessError> {
    map.get_mut(segment)
        .map(Slot::Value)
        .ok_or_else(|| AccessError::NotAddressable {
            field: segment.to_string(),
        })
}

fn descend_record<'a>(record: &'a mut dyn Record, segment: &str) -> Result<Slot<'a>, AccessError> {
    let name = find_field(record, segment).ok_or_else(|| AccessError::FieldNotFound {
        field: segment.to_string(),
    })?;
    record
        .field_slot(name)
        .ok_or_else(|| AccessError::NotAddressable {
            field: name.to_string(),
        })
}
