/*
 * Unit tests for the dispatcher event handling.
 *
 * The unit tests follow the Arrange, Act, Assert pattern. The motion
 * collaborator is mocked; commands are asserted through the mock's command
 * log.
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use std::thread::spawn;

    use crossbeam_channel::unbounded;

    use crate::dispatcher::Dispatcher;
    use crate::motion::mock::MockMotion;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Event, Heading};

    const FLOORS: [i32; 5] = [0, 1, 2, 3, 4];

    #[test]
    fn test_starting_policy_for_call_above_bottom() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        // Act
        dispatcher.call_button_pressed(3, Up);

        // Assert
        assert_eq!(dispatcher.heading(0), Heading::Moving(Up));
        assert_eq!(dispatcher.motion().last_destination(0), Some(4));
        assert_eq!(dispatcher.motion().last_indicators(0), Some((true, false)));
        assert!(dispatcher.registry().has_waiting(3, Up));
    }

    #[test]
    fn test_starting_policy_for_destination_button() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        // Act
        dispatcher.destination_button_pressed(0, 2);

        // Assert
        assert_eq!(dispatcher.heading(0), Heading::Moving(Up));
        assert_eq!(dispatcher.stops(0), vec![2]);
        assert_eq!(dispatcher.motion().last_destination(0), Some(4));
    }

    #[test]
    fn test_call_at_bottom_floor_leaves_cabs_resting() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        // Act
        dispatcher.call_button_pressed(0, Up);

        // Assert
        // The cab already rests at the bottom; boarding passengers start it
        // through their destination button instead.
        assert_eq!(dispatcher.heading(0), Heading::Idle);
        assert!(dispatcher.motion().commands.is_empty());
        assert!(dispatcher.registry().has_waiting(0, Up));
    }

    #[test]
    fn test_only_first_idle_cab_is_started() {
        // Arrange
        let motion = MockMotion::new(vec![0, 0]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 2, motion);

        // Act
        dispatcher.call_button_pressed(2, Down);

        // Assert
        assert_eq!(dispatcher.heading(0), Heading::Moving(Up));
        assert_eq!(dispatcher.heading(1), Heading::Idle);
    }

    #[test]
    fn test_pickup_scenario_commits_then_reverses() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        // Act: a passenger at floor 3 calls upward; the resting cab starts.
        dispatcher.call_button_pressed(3, Up);
        assert!(dispatcher.registry().has_waiting(3, Up));

        // The cab shuttles toward the top, passing the empty floors.
        dispatcher.approaching_floor(0, 1);
        dispatcher.approaching_floor(0, 2);
        assert_eq!(dispatcher.stops(0), Vec::<i32>::new());
        assert_eq!(dispatcher.motion().last_destination(0), Some(4));

        // Approaching floor 3 commits the pickup before arrival.
        dispatcher.approaching_floor(0, 3);

        // Assert: committed and claimed.
        assert_eq!(dispatcher.stops(0), vec![3]);
        assert!(!dispatcher.registry().has_waiting(3, Up));
        assert_eq!(dispatcher.motion().last_destination(0), Some(3));
        assert_eq!(dispatcher.heading(0), Heading::Moving(Up));

        // Act: the physical stop. Nothing waits above, so the cab reverses.
        dispatcher.stopped_at_floor(0, 3);

        // Assert
        assert_eq!(dispatcher.stops(0), Vec::<i32>::new());
        assert_eq!(dispatcher.heading(0), Heading::Moving(Down));
        assert_eq!(dispatcher.motion().last_destination(0), Some(0));
        assert_eq!(dispatcher.motion().last_indicators(0), Some((false, true)));
    }

    #[test]
    fn test_no_duplicate_commitment() {
        // Arrange
        let floors = [0, 1, 2, 3, 4, 5, 6];
        let motion = MockMotion::new(vec![0, 0]);
        let mut dispatcher = Dispatcher::new(&floors, 2, motion);

        // Both cabs head up: one for the hall call, one for a passenger
        // going to the top.
        dispatcher.call_button_pressed(5, Up);
        dispatcher.destination_button_pressed(1, 6);

        // Act: both cabs approach floor 5; the first one commits.
        dispatcher.approaching_floor(0, 5);
        dispatcher.approaching_floor(1, 5);

        // Assert: exactly one cab claims the pickup.
        assert_eq!(dispatcher.stops(0), vec![5]);
        assert_eq!(dispatcher.stops(1), vec![6]);
        assert!(!dispatcher.registry().has_waiting(5, Up));
    }

    #[test]
    fn test_lower_upward_cab_turns_when_not_needed() {
        // Arrange: cab 0 low, cab 1 higher, both heading up after two
        // down-calls woke them.
        let motion = MockMotion::new(vec![1, 3]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 2, motion);
        dispatcher.call_button_pressed(3, Down);
        dispatcher.call_button_pressed(4, Down);
        assert_eq!(dispatcher.heading(0), Heading::Moving(Up));
        assert_eq!(dispatcher.heading(1), Heading::Moving(Up));

        // Act: the lower cab approaches floor 2 with nothing of its own to
        // do; the higher cab covers everything upward.
        dispatcher.approaching_floor(0, 2);

        // Assert: the lower cab reverses mid-shaft.
        assert_eq!(dispatcher.heading(0), Heading::Moving(Down));
        assert_eq!(dispatcher.motion().last_destination(0), Some(0));
        assert_eq!(dispatcher.heading(1), Heading::Moving(Up));
    }

    #[test]
    fn test_opposite_pickup_stays_registered_until_the_stop() {
        // Arrange: an upward cab with nothing ahead and a down-call at the
        // floor it approaches.
        let motion = MockMotion::new(vec![1]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 1, motion);
        dispatcher.destination_button_pressed(0, 2);
        dispatcher.stopped_at_floor(0, 2);
        assert_eq!(dispatcher.heading(0), Heading::Moving(Down));
        dispatcher.stopped_at_floor(0, 0);
        assert_eq!(dispatcher.heading(0), Heading::Moving(Up));
        dispatcher.call_button_pressed(2, Down);

        // Act: the approach commits the stop, but the claim on the
        // down-waiter only lands once the departure direction flips at the
        // physical stop.
        dispatcher.approaching_floor(0, 2);
        assert_eq!(dispatcher.stops(0), vec![2]);
        assert!(dispatcher.registry().has_waiting(2, Down));

        dispatcher.stopped_at_floor(0, 2);

        // Assert
        assert_eq!(dispatcher.heading(0), Heading::Moving(Down));
        assert!(!dispatcher.registry().has_waiting(2, Down));
        assert_eq!(dispatcher.motion().last_destination(0), Some(0));
    }

    #[test]
    fn test_unknown_elevator_events_are_ignored() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let mut dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        // Act
        dispatcher.destination_button_pressed(5, 2);
        dispatcher.approaching_floor(9, 1);
        dispatcher.stopped_at_floor(7, 0);

        // Assert
        assert!(dispatcher.motion().commands.is_empty());
        assert_eq!(dispatcher.heading(0), Heading::Idle);
    }

    #[test]
    fn test_run_loop_matches_direct_calls() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        let (event_tx, event_rx) = unbounded::<Event>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        let dispatcher_thread = spawn(move || dispatcher.run(event_rx, terminate_rx));

        // Act: the same pickup scenario, delivered through the event queue.
        // Dropping the sender closes the queue once everything is handled.
        let events = [
            Event::CallButton { floor: 3, direction: Up },
            Event::Approaching { elevator: 0, floor: 1 },
            Event::Approaching { elevator: 0, floor: 2 },
            Event::Approaching { elevator: 0, floor: 3 },
            Event::StoppedAt { elevator: 0, floor: 3 },
        ];
        for event in events {
            event_tx.send(event).unwrap();
        }
        drop(event_tx);
        let dispatcher = dispatcher_thread.join().unwrap();
        drop(terminate_tx);

        // Assert
        assert_eq!(dispatcher.heading(0), Heading::Moving(Down));
        assert_eq!(dispatcher.stops(0), Vec::<i32>::new());
        assert!(dispatcher.registry().is_empty());
        assert_eq!(dispatcher.motion().last_destination(0), Some(0));
    }

    #[test]
    fn test_run_loop_honors_terminate() {
        // Arrange
        let motion = MockMotion::new(vec![0]);
        let dispatcher = Dispatcher::new(&FLOORS, 1, motion);

        let (_event_tx, event_rx) = unbounded::<Event>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        let dispatcher_thread = spawn(move || dispatcher.run(event_rx, terminate_rx));

        // Act
        terminate_tx.send(()).unwrap();
        let dispatcher = dispatcher_thread.join().unwrap();

        // Assert
        assert_eq!(dispatcher.heading(0), Heading::Idle);
    }
}
