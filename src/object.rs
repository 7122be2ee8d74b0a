//! PDF object types.
//!
//! The value model for everything the writer emits: scalar values, names,
//! arrays, dictionaries and indirect references. Dictionaries preserve
//! insertion order so the emitted field order matches authoring order.

use indexmap::IndexMap;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Null object
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// String (byte array)
    String(Vec<u8>),
    /// Name (starting with /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs, insertion-ordered)
    Dictionary(IndexMap<String, Object>),
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Create a String object from a Rust string.
    pub fn string(s: &str) -> Object {
        Object::String(s.as_bytes().to_vec())
    }

    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// Create a Reference object.
    pub fn reference(obj_ref: ObjectRef) -> Object {
        Object::Reference(obj_ref)
    }

    /// Try to cast to integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to string (bytes).
    pub fn as_string(&self) -> Option<&[u8]> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to dictionary.
    pub fn as_dict(&self) -> Option<&IndexMap<String, Object>> {
        match self {
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Try to cast to dictionary, mutably.
    pub fn as_dict_mut(&mut self) -> Option<&mut IndexMap<String, Object>> {
        match self {
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }
}

/// Monotonic allocator for indirect object numbers.
///
/// Outline objects and everything else in the output draw ids from the same
/// allocator, strictly in emission order. Ids start at 1 (object 0 is the
/// xref free-list head) and are never reused or renumbered.
#[derive(Debug)]
pub struct ObjectIdAllocator {
    next: u32,
}

impl ObjectIdAllocator {
    /// Create an allocator with the first id set to 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next object id.
    pub fn alloc(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Allocate the next object id as a generation-0 reference.
    pub fn alloc_ref(&mut self) -> ObjectRef {
        ObjectRef::new(self.alloc(), 0)
    }

    /// Number of ids handed out so far.
    ///
    /// The xref `Size` entry is this plus one, counting the free object 0.
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}

impl Default for ObjectIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_display() {
        let obj_ref = ObjectRef::new(10, 0);
        assert_eq!(format!("{}", obj_ref), "10 0 R");
    }

    #[test]
    fn test_object_accessors() {
        assert_eq!(Object::Integer(42).as_integer(), Some(42));
        assert_eq!(Object::name("Outlines").as_name(), Some("Outlines"));
        assert_eq!(Object::string("title_A").as_string(), Some(&b"title_A"[..]));
        assert!(Object::Null.as_integer().is_none());

        let obj_ref = ObjectRef::new(3, 0);
        assert_eq!(Object::reference(obj_ref).as_reference(), Some(obj_ref));
    }

    #[test]
    fn test_dictionary_preserves_insertion_order() {
        let mut dict = IndexMap::new();
        dict.insert("Title".to_string(), Object::string("t"));
        dict.insert("Parent".to_string(), Object::reference(ObjectRef::new(1, 0)));
        dict.insert("Dest".to_string(), Object::reference(ObjectRef::new(2, 0)));

        let obj = Object::Dictionary(dict);
        let keys: Vec<&str> = obj.as_dict().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["Title", "Parent", "Dest"]);
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = ObjectIdAllocator::new();
        assert_eq!(ids.alloc(), 1);
        assert_eq!(ids.alloc(), 2);
        assert_eq!(ids.alloc_ref(), ObjectRef::new(3, 0));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_object_ref_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ObjectRef::new(1, 0));
        set.insert(ObjectRef::new(2, 0));
        set.insert(ObjectRef::new(1, 0));

        assert_eq!(set.len(), 2);
    }
}
