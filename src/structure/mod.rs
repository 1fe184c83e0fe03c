// Tue Jan 15 2026 - Alex

pub mod definition;
pub mod engine;
pub mod error;
pub mod member;
pub mod offset;
pub mod padding;
pub mod serializer;
pub mod size;
pub mod template;
pub mod validator;

pub use definition::{DefinitionParser, ParsedDefinition};
pub use engine::{LayoutEngine, LayoutOutcome};
pub use error::{LayoutError, LayoutWarning};
pub use member::{Member, MemberKind};
pub use offset::Offset;
pub use padding::Padder;
pub use serializer::{SerializableMember, SerializableTemplate};
pub use size::Size;
pub use template::StructureTemplate;
pub use validator::TemplateValidator;
