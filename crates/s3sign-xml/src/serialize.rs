//! Request body serialization.
//!
//! Bodies are written without an XML declaration: the root element carries the
//! S3 namespace and every field is a simple text child.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::BytesText;

use crate::error::XmlError;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Trait for request documents.
///
/// Implementors write their content as child elements; the root element and
/// namespace are handled by [`to_xml`].
pub trait S3Serialize {
    /// Root element name, e.g. `CreateBucketConfiguration`.
    const ROOT: &'static str;

    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a document as `<Root xmlns="...">...</Root>`.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: S3Serialize>(value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);

    writer
        .create_element(T::ROOT)
        .with_attribute(("xmlns", S3_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

/// Write a simple `<tag>text</tag>` element.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample(&'static str);

    impl S3Serialize for Sample {
        const ROOT: &'static str = "Sample";

        fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
            write_text_element(writer, "Value", self.0)
        }
    }

    #[test]
    fn test_should_write_root_with_namespace_and_no_declaration() {
        let xml = to_xml(&Sample("x")).unwrap();
        assert_eq!(
            std::str::from_utf8(&xml).unwrap(),
            "<Sample xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"><Value>x</Value></Sample>"
        );
    }

    #[test]
    fn test_should_escape_text_content() {
        let xml = to_xml(&Sample("a<b&c")).unwrap();
        let xml = std::str::from_utf8(&xml).unwrap();
        assert!(xml.contains("<Value>a&lt;b&amp;c</Value>"));
    }
}
