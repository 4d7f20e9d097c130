//! HTTP request handlers organized by functionality

pub mod listing;
pub mod pages;
pub mod service;
