//! Employee records on the wire and at rest.
//!
//! JSON goes through the role and employment-type codecs; database rows store identity
//! keys only, so reordering a set's declarations never changes what a row means.

use crate::Catalog;
use crate::employment::{EmploymentInfo, EmploymentType};
use crate::error::CatalogError;
use crate::role::{Role, RoleInfo};
use canon_registry::Encoded;
use serde::{Deserialize, Serialize};

/// An employee as the application sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDto {
    pub name: String,
    pub role: Role,
    pub employment_type: EmploymentType,
}

/// Persistence shape: every closed value is stored by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    pub name: String,
    pub role: String,
    pub employment_type: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeJsonOut<'c> {
    name: &'c str,
    role: Encoded<'c, RoleInfo, canon_registry::NoBehavior>,
    employment_type: Encoded<'c, EmploymentInfo, canon_registry::NoBehavior>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeJsonIn {
    name: String,
    role: String,
    employment_type: String,
}

impl Catalog {
    /// Writes `employee` as JSON using the configured wire forms.
    ///
    /// # Errors
    ///
    /// `Json` when serialization fails.
    pub fn employee_to_json(&self, employee: &EmployeeDto) -> Result<String, CatalogError> {
        let roles = self.roles.codec();
        let types = self.employment_types.codec();
        let wire = EmployeeJsonOut {
            name: &employee.name,
            role: roles.encoded(roles.set().record_of(employee.role)?),
            employment_type: types.encoded(types.set().record_of(employee.employment_type)?),
        };
        Ok(serde_json::to_string(&wire)?)
    }

    /// Reads an employee from JSON, rejecting values no codec strategy accepts.
    ///
    /// # Errors
    ///
    /// `Json` for malformed JSON, `Decode` naming the set and the offending value.
    pub fn employee_from_json(&self, json: &str) -> Result<EmployeeDto, CatalogError> {
        let wire: EmployeeJsonIn = serde_json::from_str(json)?;
        Ok(EmployeeDto {
            name: wire.name,
            role: self.roles.codec().decode(&wire.role)?.data().role,
            employment_type: self.employment_types.decode(&wire.employment_type)?,
        })
    }

    /// # Errors
    ///
    /// Never fails for values of the declared sets.
    pub fn employee_row(&self, employee: &EmployeeDto) -> Result<EmployeeRow, CatalogError> {
        Ok(EmployeeRow {
            name: employee.name.clone(),
            role: self.roles.set().record_of(employee.role)?.identity().to_owned(),
            employment_type: self
                .employment_types
                .set()
                .record_of(employee.employment_type)?
                .identity()
                .to_owned(),
        })
    }

    /// Maps a stored row back by identity.
    ///
    /// # Errors
    ///
    /// `Registry` wrapping `UnknownIdentity` when a stored key names no variant.
    pub fn employee_from_row(&self, row: &EmployeeRow) -> Result<EmployeeDto, CatalogError> {
        Ok(EmployeeDto {
            name: row.name.clone(),
            role: self.roles.set().by_identity(&row.role)?.data().role,
            employment_type: self.employment_types.set().by_identity(&row.employment_type)?.data().kind,
        })
    }
}
