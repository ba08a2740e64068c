//! Actor identity and record visibility for Missionflow.
//!
//! Every mission and long-term product records the email of the actor who
//! created it. Ordinary operators only ever see their own records, while
//! supervisors see the whole matrix. This module owns the actor model, the
//! role derivation rule, and the scoping helper the read paths apply before
//! returning records. It is a pure domain context: identity has no ports or
//! adapters because the authenticated email arrives from the session layer.

pub mod domain;
