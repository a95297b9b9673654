use approx::assert_abs_diff_eq;
use asteroids::{Ship, ShipError, Shipyard, SPEED_OF_LIGHT};
use std::f64::consts::PI;
use test_log::test;

#[test]
fn radius_five_rejected_radius_ten_accepted() {
    let yard = Shipyard::new();
    assert_eq!(yard.minimal_radius(), 10.0);

    assert_eq!(yard.ship(5.0), Err(ShipError::InvalidRadius));
    assert_eq!(yard.ship(10.0).unwrap().radius(), 10.0);
}

#[test]
fn light_speed_clamp_example() {
    let mut ship = Shipyard::new().ship(10.0).unwrap();
    assert_eq!(ship.speed_limit(), SPEED_OF_LIGHT);

    ship.set_velocity([400000.0, 0.0]);
    assert_eq!(ship.velocity(), [300000.0, 0.0]);
}

#[test]
fn full_ship_lifecycle() {
    let yard = Shipyard::new();
    let mut ship = yard.ship_at(&[100.0, -50.0], 25.0).unwrap();

    ship.set_orientation(PI / 4.0);
    ship.set_velocity([-1000.0, 2000.0]);
    ship.set_position(&[110.0, -30.0]).unwrap();

    assert_eq!(ship.position(), [110.0, -30.0]);
    assert_eq!(ship.orientation(), PI / 4.0);
    assert_eq!(ship.velocity(), [-1000.0, 2000.0]);
    assert_eq!(ship.radius(), 25.0);

    // A rejected move changes nothing.
    let before = ship.clone();
    assert_eq!(
        ship.set_position(&[f64::NAN, 0.0]),
        Err(ShipError::InvalidPosition)
    );
    assert_eq!(ship, before);
}

#[test]
fn shipyards_are_independent() {
    let strict = Shipyard::with_minimal_radius(50.0).unwrap();
    let lenient = Shipyard::with_minimal_radius(1.0).unwrap();

    assert_eq!(strict.ship(20.0), Err(ShipError::InvalidRadius));
    assert!(lenient.ship(20.0).is_ok());
}

#[test]
fn failed_minimal_radius_change_keeps_value() {
    let mut yard = Shipyard::with_minimal_radius(4.0).unwrap();
    assert_eq!(
        yard.set_minimal_radius(-4.0),
        Err(ShipError::InvalidMinimalRadius)
    );
    assert_eq!(yard.minimal_radius(), 4.0);
    assert!(yard.ship(4.0).is_ok());
}

#[test]
fn moving_ship_accepts_valid_and_rejects_invalid_positions() {
    let yard = Shipyard::new();
    assert!(yard.ship_moving(&[0.0, 0.0], [1.0, 1.0]).is_ok());
    assert_eq!(
        yard.ship_moving(&[0.0, f64::NEG_INFINITY], [1.0, 1.0]),
        Err(ShipError::InvalidPosition)
    );
    assert_eq!(
        yard.ship_at_rest(&[0.0, 0.0, 0.0]),
        Err(ShipError::InvalidPosition)
    );
}

#[test]
fn diagonal_clamp_preserves_direction() {
    let mut ship = Shipyard::new().ship_at_rest(&[0.0, 0.0]).unwrap();
    ship.set_velocity([-500000.0, -500000.0]);

    let v = ship.velocity();
    assert_abs_diff_eq!(v[0], v[1], epsilon = 1e-9);
    assert!(v[0] < 0.0);
    assert_abs_diff_eq!(ship.speed(), SPEED_OF_LIGHT, epsilon = 1e-6);
}

#[test]
fn custom_speed_limit_ship() {
    let ship = Shipyard::new()
        .ship_with_speed_limit(&[0.0, 0.0], [300.0, 400.0], 50.0)
        .unwrap();
    assert_eq!(ship.speed_limit(), 50.0);
    assert_abs_diff_eq!(ship.velocity()[0], 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ship.velocity()[1], 40.0, epsilon = 1e-9);
    assert!(Ship::can_have_as_speed_limit(ship.speed_limit()));
}

#[test]
fn errors_propagate_with_question_mark() {
    fn build(yard: &Shipyard) -> Result<Ship, Box<dyn std::error::Error>> {
        let ship = yard.ship_at(&[0.0, 0.0], 1.0)?;
        Ok(ship)
    }

    let err = build(&Shipyard::new()).unwrap_err();
    assert_eq!(err.to_string(), ShipError::InvalidRadius.to_string());
}
