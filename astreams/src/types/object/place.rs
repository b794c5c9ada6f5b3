use crate::{types::property, Object};

use super::OBJECT;

crate::vocab! {
	PLACE = "Place" : [OBJECT] { ACCURACY, ALTITUDE, LATITUDE, LONGITUDE, RADIUS, UNITS };
}

pub trait Place : Object {
	crate::property!(
		/// accuracy of the coordinates, as a percentage
		accuracy -> single property::ACCURACY
	);
	crate::property!(altitude -> single property::ALTITUDE);
	crate::property!(latitude -> single property::LATITUDE);
	crate::property!(longitude -> single property::LONGITUDE);
	crate::property!(radius -> single property::RADIUS);
	crate::property!(
		/// unit of `altitude` and `radius`: one of "cm", "feet", "inches", "km", "m", "miles", or an IRI
		units -> single property::UNITS
	);
}

impl Place for crate::Entity {}
