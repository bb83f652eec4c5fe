//! Key structures, such as symbols and sentences.
//!
//! # Other structures without an implementation.
//!
//! ## Languages
//! A *language* 𝓛 is some set of [symbols](symbol), closed under the connectives of [sentences](sentence). \
//! Every sentence is expressed in some language, and the language of interest to a [model check](crate::procedures::model_check) is the language of the symbols appearing in the knowledge and the query.
//!
//! ## Models
//!
//! A model of a sentence is a [valuation] which gives a value to every symbol of the sentence, and on which the sentence is true. \
//! Knowledge 𝐊 *entails* a query 𝐐 when every model of 𝐊 (over the symbols of 𝐊 and 𝐐) is a model of 𝐐.
//! If 𝐊 has no models then 𝐊 entails every query.

pub mod sentence;
pub mod symbol;
pub mod valuation;
