//! Fixture record types and their hand-built codecs, shared across the
//! integration test files in this crate.

use std::collections::HashMap;
use std::sync::Arc;

use recodec_codec::{NestedCodecRef, RecordCodec};

/// A flat record covering every scalar and string field kind.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Scalar {
    pub a: i8,
    pub b: i16,
    pub c: i32,
    pub d: i64,
    pub e: f32,
    pub f: f64,
    pub flag: bool,
    pub label: Option<String>,
}

pub fn scalar_codec() -> Arc<RecordCodec<Scalar>> {
    RecordCodec::builder("Scalar")
        .field_i8("a", |s: &Scalar| s.a, |s: &mut Scalar, v| s.a = v)
        .field_i16("b", |s: &Scalar| s.b, |s: &mut Scalar, v| s.b = v)
        .field_i32("c", |s: &Scalar| s.c, |s: &mut Scalar, v| s.c = v)
        .field_i64("d", |s: &Scalar| s.d, |s: &mut Scalar, v| s.d = v)
        .field_f32("e", |s: &Scalar| s.e, |s: &mut Scalar, v| s.e = v)
        .field_f64("f", |s: &Scalar| s.f, |s: &mut Scalar, v| s.f = v)
        .field_bool("flag", |s: &Scalar| s.flag, |s: &mut Scalar, v| s.flag = v)
        .field_string(
            "label",
            |s: &Scalar| &s.label,
            |s: &mut Scalar, v| s.label = v,
        )
        .build()
        .unwrap()
}

/// A record with every container kind: a list, a primitive array, and a
/// string-keyed map.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Containers {
    pub scores: Option<Vec<i32>>,
    pub flags: Option<Box<[bool]>>,
    pub tags: Option<HashMap<i32, i32>>,
}

pub fn containers_codec() -> Arc<RecordCodec<Containers>> {
    RecordCodec::builder("Containers")
        .field_list(
            "scores",
            |c: &Containers| &c.scores,
            |c: &mut Containers, v| c.scores = v,
        )
        .field_prim_array(
            "flags",
            |c: &Containers| &c.flags,
            |c: &mut Containers, v| c.flags = v,
        )
        .field_map(
            "tags",
            |c: &Containers| &c.tags,
            |c: &mut Containers, v| c.tags = v,
        )
        .build()
        .unwrap()
}

/// A parent record holding one nested child record.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Address {
    pub zip: i32,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct Person {
    pub age: i32,
    pub address: Option<Box<Address>>,
}

pub fn address_codec() -> Arc<RecordCodec<Address>> {
    RecordCodec::builder("Address")
        .field_i32("zip", |a: &Address| a.zip, |a: &mut Address, v| a.zip = v)
        .build()
        .unwrap()
}

pub fn person_codec() -> Arc<RecordCodec<Person>> {
    let address = address_codec();
    RecordCodec::builder("Person")
        .field_i32("age", |p: &Person| p.age, |p: &mut Person, v| p.age = v)
        .field_nested(
            "address",
            "Address",
            NestedCodecRef::from(address),
            |p: &Person| &p.address,
            |p: &mut Person, v| p.address = v,
        )
        .build()
        .unwrap()
}

/// A self-referential record: a singly linked list node.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ListNode {
    pub value: i32,
    pub next: Option<Box<ListNode>>,
}

pub fn list_node_codec() -> Arc<RecordCodec<ListNode>> {
    RecordCodec::<ListNode>::build_self_referential("ListNode", |weak| {
        RecordCodec::builder("ListNode")
            .field_i32(
                "value",
                |n: &ListNode| n.value,
                |n: &mut ListNode, v| n.value = v,
            )
            .field_nested_weak(
                "next",
                "ListNode",
                weak.clone(),
                |n: &ListNode| &n.next,
                |n: &mut ListNode, v| n.next = v,
            )
    })
    .unwrap()
}

/// A type whose `Default` impl panics, for exercising
/// `CodecError::ConstructionFailed`.
#[derive(Debug)]
pub struct Doomed;

impl Default for Doomed {
    fn default() -> Self {
        panic!("Doomed::default always panics");
    }
}

pub fn doomed_codec() -> Arc<RecordCodec<Doomed>> {
    RecordCodec::builder("Doomed").build().unwrap()
}
