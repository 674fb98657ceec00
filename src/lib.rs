#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use cv_span as span;

pub use cv_span::{Contiguous, ContiguousMut, DYNAMIC_EXTENT, View, ViewError, ViewMut};
