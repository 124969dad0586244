//! Entity trait implementations for the Person and Resident domain types.

use super::actions::{PersonAction, PersonActionResult, ResidentAction, ResidentActionResult};
use crate::framework::Entity;
use crate::model::{Person, PersonCreate, PersonUpdate, Resident, ResidentCreate};
use crate::validation::ValidationError;

impl Entity for Person {
    type CreateParams = PersonCreate;
    type UpdateParams = PersonUpdate;
    type Action = PersonAction;
    type ActionResult = PersonActionResult;
    type Error = ValidationError;

    fn from_create_params(params: PersonCreate) -> Result<Self, ValidationError> {
        Self::new(params.name, params.age, params.email)
    }

    /// Handles updates to the Person entity.
    ///
    /// # Fields Updated
    /// - `name`: Display name
    /// - `email`: Contact address
    fn on_update(&mut self, update: PersonUpdate) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.set_name(name)?;
        }
        if let Some(email) = update.email {
            next.change_email(email)?;
        }
        *self = next;
        Ok(())
    }

    fn handle_action(&mut self, action: PersonAction) -> Result<PersonActionResult, ValidationError> {
        match action {
            PersonAction::Birthday => {
                self.birthday();
                Ok(PersonActionResult::Birthday(self.age()))
            }
            PersonAction::ChangeEmail(email) => {
                self.change_email(email)?;
                Ok(PersonActionResult::ChangeEmail(()))
            }
            PersonAction::IsAdult => Ok(PersonActionResult::IsAdult(self.is_adult())),
        }
    }
}

impl Entity for Resident {
    type CreateParams = ResidentCreate;
    type UpdateParams = ();
    type Action = ResidentAction;
    type ActionResult = ResidentActionResult;
    type Error = ValidationError;

    fn from_create_params(params: ResidentCreate) -> Result<Self, ValidationError> {
        Self::new(params.name, params.age, params.city)
    }

    fn handle_action(
        &mut self,
        action: ResidentAction,
    ) -> Result<ResidentActionResult, ValidationError> {
        match action {
            ResidentAction::Greet => Ok(ResidentActionResult::Greet(self.greet())),
            ResidentAction::Relocate(city) => {
                self.relocate(city)?;
                Ok(ResidentActionResult::Relocate(()))
            }
        }
    }
}
