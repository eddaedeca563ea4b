//! # Employee Repository
//!
//! Staff records over the `employees` collection.
//!
//! The one rule beyond plain CRUD: the store must always retain at least
//! one active administrator, so deleting the last one is refused.

use tracing::debug;

use loja_core::validation::validate_employee;
use loja_core::Employee;

use crate::collection::Record;
use crate::error::{StoreError, StoreResult};
use crate::Tables;

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Tables {
    /// Inserts an employee after validating the record.
    pub fn insert_employee(&mut self, employee: Employee) -> StoreResult<()> {
        validate_employee(&employee)?;
        debug!(id = %employee.id, name = %employee.name, "Inserting employee");
        self.employees.add(employee)
    }

    /// Applies a partial update to an employee, validating the result
    /// before it replaces the stored record.
    pub fn update_employee(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Employee),
    ) -> StoreResult<()> {
        let current = self
            .employees
            .get(id)
            .ok_or_else(|| StoreError::not_found("Employee", id))?;

        let mut updated = current.clone();
        f(&mut updated);
        validate_employee(&updated)?;

        debug!(id = %id, "Updating employee");
        self.employees.update(id, |employee| *employee = updated);
        Ok(())
    }

    /// Deletes an employee.
    ///
    /// ## Errors
    /// - [`StoreError::LastAdmin`] when the target is the only active
    ///   administrator left
    pub fn delete_employee(&mut self, id: &str) -> StoreResult<()> {
        let target = self
            .employees
            .get(id)
            .ok_or_else(|| StoreError::not_found("Employee", id))?;

        if target.is_active_admin() && self.active_admin_count() == 1 {
            return Err(StoreError::LastAdmin);
        }

        self.employees.delete(id);
        debug!(id = %id, "Deleted employee");
        Ok(())
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    fn active_admin_count(&self) -> usize {
        self.employees
            .iter()
            .filter(|employee| employee.is_active_admin())
            .count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
