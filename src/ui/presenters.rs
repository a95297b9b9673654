use crate::io::OutputWriter;
use crate::models::ship::Ship;
use crate::models::shipyard::Shipyard;

pub struct ShipPresenter;

// A clamped speed never exceeds the limit but may sit a few ulps below it.
fn at_speed_limit(ship: &Ship) -> bool {
    ship.speed() >= ship.speed_limit() * (1.0 - 1e-9)
}

impl ShipPresenter {
    pub fn show_shipyard(shipyard: &Shipyard, output: &mut dyn OutputWriter) {
        output.writeln(&format!("MINIMAL RADIUS {}", shipyard.minimal_radius()));
    }

    pub fn show_fleet(fleet: &[Ship], output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{:<4}{:>8}{:>22}{:>9}{:>12}",
            "#", "RADIUS", "POSITION", "HEADING", "SPEED"
        ));
        for (i, ship) in fleet.iter().enumerate() {
            let p = ship.position();
            let flag = if at_speed_limit(ship) { " *" } else { "" };
            output.writeln(&format!(
                "{:<4}{:>8.2}{:>22}{:>9.3}{:>12.1}{}",
                i + 1,
                ship.radius(),
                format!("({:.1}, {:.1})", p[0], p[1]),
                ship.orientation(),
                ship.speed(),
                flag,
            ));
        }
        let at_limit = fleet.iter().filter(|s| at_speed_limit(s)).count();
        output.writeln(&format!("{} OF {} SHIPS AT SPEED LIMIT", at_limit, fleet.len()));
    }
}
