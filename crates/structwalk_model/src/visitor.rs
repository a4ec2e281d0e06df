//! Visitor trait for metadata-aware traversal.
//!
//! Each callback receives the current [`Node`], with its depth, index, name
//! and ancestor chain already reconstructed. Every method has a no-op default
//! implementation, so you only override the events you care about.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use structwalk_model::{Node, Visitor, visit};
//! use structwalk_value::{Record, Value};
//!
//! /// Collects the selector of every record field.
//! struct FieldNames {
//!     names: Vec<String>,
//! }
//!
//! impl<'v> Visitor<'v> for FieldNames {
//!     type Error = Infallible;
//!
//!     fn record_field(&mut self, field: Node<'_, 'v>) -> Result<(), Infallible> {
//!         self.names.push(field.selector());
//!         Ok(())
//!     }
//! }
//!
//! let model = Value::Record(
//!     Record::new()
//!         .with_field("name", "Ada")
//!         .with_field("address", Record::new().with_field("city", "London")),
//! );
//!
//! let mut collector = FieldNames { names: Vec::new() };
//! visit(&model, &mut collector).unwrap();
//! assert_eq!(collector.names, vec!["name", "address", "address.city"]);
//! ```

use crate::Node;

/// Observer of a metadata-aware traversal.
///
/// # Lifetime
///
/// The `'v` lifetime ties visited values to the model being walked, so
/// visitors may keep `&'v Value` references past the callback.
///
/// # Errors
///
/// Returning `Err` aborts the traversal immediately. No further callback
/// fires, including the `end_*` of enclosing containers, and the error is
/// returned to the caller inside [`WalkError::Visitor`](crate::WalkError).
pub trait Visitor<'v> {
    type Error;

    // === Records ===

    fn begin_record(&mut self, _record: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn record_field(&mut self, _field: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_record(&mut self, _record: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    // === Dynamic-length sequences ===

    fn begin_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn sequence_element(&mut self, _element: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    // === Fixed-length sequences ===

    fn begin_fixed_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fixed_sequence_element(&mut self, _element: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_fixed_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'v, V> Visitor<'v> for &mut V
where
    V: Visitor<'v> + ?Sized,
{
    type Error = V::Error;

    fn begin_record(&mut self, record: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).begin_record(record)
    }

    fn record_field(&mut self, field: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).record_field(field)
    }

    fn end_record(&mut self, record: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).end_record(record)
    }

    fn begin_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).begin_sequence(sequence)
    }

    fn sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).sequence_element(element)
    }

    fn end_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).end_sequence(sequence)
    }

    fn begin_fixed_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).begin_fixed_sequence(sequence)
    }

    fn fixed_sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).fixed_sequence_element(element)
    }

    fn end_fixed_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        (**self).end_fixed_sequence(sequence)
    }
}
