//! Parameter type trees as the workflow-submission service expects them
//!
//! The vocabulary is closed: new kinds are added as variants here, and the
//! parser maps tokens onto them in one place (`PrimitiveType::from_name`).

use serde::Serialize;
use std::fmt;

/// Scalar types a declaration can bottom out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    Int,
    String,
    Float,
    Boolean,
    File,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 5] = [
        PrimitiveType::Int,
        PrimitiveType::String,
        PrimitiveType::Float,
        PrimitiveType::Boolean,
        PrimitiveType::File,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|primitive| primitive.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "Int",
            PrimitiveType::String => "String",
            PrimitiveType::Float => "Float",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::File => "File",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in a parameter type tree.
///
/// Serialises with a `type` tag and a kind-specific child field:
/// `primitive_type`, `array_type` (+ `non_empty`) or `optional_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeSpec {
    Primitive {
        primitive_type: PrimitiveType,
    },
    Array {
        array_type: Box<TypeSpec>,
        non_empty: bool,
    },
    Optional {
        optional_type: Box<TypeSpec>,
    },
}

impl TypeSpec {
    pub fn primitive(primitive_type: PrimitiveType) -> Self {
        TypeSpec::Primitive { primitive_type }
    }

    pub fn array(inner: TypeSpec, non_empty: bool) -> Self {
        TypeSpec::Array {
            array_type: Box::new(inner),
            non_empty,
        }
    }

    pub fn optional(inner: TypeSpec) -> Self {
        TypeSpec::Optional {
            optional_type: Box::new(inner),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeSpec::Optional { .. })
    }

    /// Number of array levels between this node and its primitive
    pub fn array_depth(&self) -> usize {
        match self {
            TypeSpec::Primitive { .. } => 0,
            TypeSpec::Array { array_type, .. } => 1 + array_type.array_depth(),
            TypeSpec::Optional { optional_type } => optional_type.array_depth(),
        }
    }

    /// The primitive at the bottom of the tree
    pub fn leaf(&self) -> PrimitiveType {
        match self {
            TypeSpec::Primitive { primitive_type } => *primitive_type,
            TypeSpec::Array { array_type, .. } => array_type.leaf(),
            TypeSpec::Optional { optional_type } => optional_type.leaf(),
        }
    }
}

/// Renders back into womtool notation, e.g. `Array[Int]+?`
impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Primitive { primitive_type } => write!(f, "{}", primitive_type),
            TypeSpec::Array {
                array_type,
                non_empty,
            } => {
                write!(f, "Array[{}]", array_type)?;
                if *non_empty {
                    f.write_str("+")?;
                }
                Ok(())
            }
            TypeSpec::Optional { optional_type } => write!(f, "{}?", optional_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_lookup_is_case_sensitive() {
        assert_eq!(PrimitiveType::from_name("File"), Some(PrimitiveType::File));
        assert_eq!(PrimitiveType::from_name("file"), None);
        assert_eq!(PrimitiveType::from_name("Map"), None);
    }

    #[test]
    fn test_wire_shape() {
        let spec = TypeSpec::optional(TypeSpec::array(
            TypeSpec::primitive(PrimitiveType::File),
            true,
        ));
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "type": "optional",
                "optional_type": {
                    "type": "array",
                    "array_type": {"type": "primitive", "primitive_type": "File"},
                    "non_empty": true
                }
            })
        );
    }

    #[test]
    fn test_depth_and_leaf() {
        let spec = TypeSpec::array(
            TypeSpec::array(TypeSpec::primitive(PrimitiveType::Int), false),
            false,
        );
        assert_eq!(spec.array_depth(), 2);
        assert_eq!(spec.leaf(), PrimitiveType::Int);
        assert_eq!(spec.to_string(), "Array[Array[Int]]");
    }
}
