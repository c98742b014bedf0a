//! wsa-removal - Remove an application from every WorkSpace in a directory
//!
//! This crate provides the Lambda handler and the operator CLI that find
//! WorkSpaces with a given application associated, disassociate it and
//! force a redeploy so the application is uninstalled.

pub mod aws;
pub mod handler;
pub mod logging;
pub mod removal;
