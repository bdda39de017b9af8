/*
 * Unit tests for coordinator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_coordinator_call_and_status
 *  - test_coordinator_serializes_clients
 *  - test_coordinator_obstruction_faults_lift
 *  - test_coordinator_terminate
 *  - test_coordinator_stops_without_clients
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod coordinator_tests {
    use crate::coordinator::{Coordinator, Dispatcher, FleetClient, Request};
    use crate::elevator::Lift;
    use crate::shared::{CallError, LiftKind};
    use crossbeam_channel::{unbounded, Sender};
    use std::thread::{Builder, JoinHandle};
    use std::time::Duration;

    fn setup_coordinator(
        travel_time: u64,
    ) -> (FleetClient, Sender<()>, JoinHandle<Dispatcher<Lift>>) {
        // Arrange mock channels
        let (request_tx, request_rx) = unbounded::<Request>();
        let (coordinator_terminate_tx, coordinator_terminate_rx) = unbounded::<()>();

        let travel_time = Duration::from_millis(travel_time);
        let lifts = vec![
            Lift::new("lift-1", LiftKind::Standard, travel_time),
            Lift::new("lift-2", LiftKind::Standard, travel_time),
            Lift::new("express", LiftKind::Express, travel_time),
        ];
        let dispatcher = Dispatcher::new(lifts).unwrap();
        let coordinator = Coordinator::new(dispatcher, request_rx, coordinator_terminate_rx);

        let coordinator_thread = Builder::new()
            .name("coordinator".into())
            .spawn(move || coordinator.run())
            .unwrap();

        (FleetClient::new(request_tx), coordinator_terminate_tx, coordinator_thread)
    }

    #[test]
    fn test_coordinator_call_and_status() {
        // Purpose: Verify that calls and status queries are answered through the client

        // Arrange
        let (client, terminate_tx, coordinator_thread) = setup_coordinator(1);

        // Act
        let dispatch = client.call(4).unwrap();
        let status = client.status().unwrap();

        // Assert
        assert_eq!(dispatch.name, "lift-1");
        assert_eq!(dispatch.floor, 4);
        assert_eq!(status.len(), 3);
        assert_eq!(status[0].floor, 4);
        assert_eq!(status[0].status, "Stopped");
        assert_eq!(status[1].floor, 0);
        assert_eq!(status[2].floor, 0);

        // Cleanup
        terminate_tx.send(()).unwrap();
        coordinator_thread.join().unwrap();
    }

    #[test]
    fn test_coordinator_serializes_clients() {
        // Purpose: Verify that concurrent callers are served one at a time

        // Arrange
        let (client, terminate_tx, coordinator_thread) = setup_coordinator(10);

        // Act
        let callers: Vec<_> = (1..=6)
            .map(|floor| {
                let client = client.clone();
                std::thread::spawn(move || client.call(floor * 10).unwrap())
            })
            .collect();
        for caller in callers {
            caller.join().unwrap();
        }
        terminate_tx.send(()).unwrap();
        let dispatcher = coordinator_thread.join().unwrap();

        // Assert
        let status = dispatcher.get_status();
        assert!(status.iter().all(|record| record.status == "Stopped"));
        assert!(status.iter().all(|record| record.floor % 10 == 0));
    }

    #[test]
    fn test_coordinator_obstruction_faults_lift() {
        // Purpose: Verify that an obstructed lift faults and the next call goes elsewhere

        // Arrange
        let (client, terminate_tx, coordinator_thread) = setup_coordinator(1);
        client.call(0).unwrap();
        client.set_obstruction(0, true).unwrap();

        // Act
        let faulted = client.call(3).unwrap();
        let next = client.call(3).unwrap();
        let unknown = client.set_obstruction(7, true);

        // Assert
        assert!(faulted.faulted());
        assert_eq!(faulted.name, "lift-1");
        assert_eq!(next.name, "lift-2");
        assert_eq!(next.floor, 3);
        assert_eq!(unknown, Err(CallError::UnknownLift { lift: 7 }));
        let status = client.status().unwrap();
        assert_eq!(status[0].status, "OutOfService");
        assert_eq!(status[0].floor, 0);

        // Cleanup
        terminate_tx.send(()).unwrap();
        coordinator_thread.join().unwrap();
    }

    #[test]
    fn test_coordinator_terminate() {
        // Purpose: Verify that a terminated coordinator is reported to its clients

        // Arrange
        let (client, terminate_tx, coordinator_thread) = setup_coordinator(1);

        // Act
        terminate_tx.send(()).unwrap();
        coordinator_thread.join().unwrap();

        // Assert
        assert_eq!(client.call(2), Err(CallError::CoordinatorGone));
        assert_eq!(client.status(), Err(CallError::CoordinatorGone));
    }

    #[test]
    fn test_coordinator_stops_without_clients() {
        // Purpose: Verify that the coordinator ends once every client is dropped

        // Arrange
        let (client, _terminate_tx, coordinator_thread) = setup_coordinator(1);
        client.call(1).unwrap();

        // Act
        drop(client);
        let dispatcher = coordinator_thread.join().unwrap();

        // Assert
        assert_eq!(dispatcher.get_status()[0].floor, 1);
    }
}
