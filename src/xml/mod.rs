// XML module - generic element tree and its serializer

pub mod element;
pub mod serialize;

pub use element::{AttrValue, Element, Node};
pub use serialize::{XmlDeclaration, XmlOptions};
