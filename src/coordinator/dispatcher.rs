/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::LiftUnit;
use crate::shared::{CallError, Dispatch, FleetError, LiftState, StatusRecord};

/**
 * Picks which lift of the fleet services a floor request.
 *
 * The fleet is fixed at construction and kept in construction order. Out of service lifts are
 * skipped. Among the rest the closest lift wins, and on equal distance the one that comes first
 * in the fleet.
 */
pub struct Dispatcher<L: LiftUnit> {
    lifts: Vec<L>,
}

impl<L: LiftUnit> Dispatcher<L> {
    pub fn new(lifts: Vec<L>) -> Result<Dispatcher<L>, FleetError> {
        if lifts.is_empty() {
            return Err(FleetError::EmptyFleet);
        }
        Ok(Dispatcher { lifts })
    }

    pub fn lifts(&self) -> &[L] {
        &self.lifts
    }

    pub fn call(&mut self, floor: i32) -> Result<Dispatch, CallError> {
        let index = match self.select(floor) {
            Some(index) => index,
            None => {
                log::error!("No lift available for floor {}", floor);
                return Err(CallError::NoLiftAvailable { floor });
            }
        };

        let lift = &mut self.lifts[index];
        log::info!(
            "Dispatching {} from floor {} to floor {}",
            lift.name(),
            lift.current_floor(),
            floor
        );
        lift.move_to(floor);

        Ok(Dispatch {
            lift: index,
            name: lift.name().to_string(),
            floor: lift.current_floor(),
            status: lift.status(),
        })
    }

    pub fn set_obstruction(&mut self, lift: usize, obstructed: bool) -> Result<(), CallError> {
        let unit = self
            .lifts
            .get_mut(lift)
            .ok_or(CallError::UnknownLift { lift })?;
        log::info!("{} obstruction {}", unit.name(), if obstructed { "on" } else { "off" });
        unit.set_obstruction(obstructed);
        Ok(())
    }

    pub fn get_status(&self) -> Vec<StatusRecord> {
        self.lifts
            .iter()
            .map(|lift| StatusRecord::new(lift.current_floor(), lift.status()))
            .collect()
    }

    // min_by_key keeps the first of equal elements, which gives the fleet order tie-break
    fn select(&self, floor: i32) -> Option<usize> {
        self.lifts
            .iter()
            .enumerate()
            .filter(|(_, lift)| lift.status() != LiftState::OutOfService)
            .min_by_key(|(_, lift)| lift.current_floor().abs_diff(floor))
            .map(|(index, _)| index)
    }
}
