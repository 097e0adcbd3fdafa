use crate::utils::constants::{
    CVAR_PPT, CVAR_SOLCLEAR, CVAR_SOLSLOPE, CVAR_SOLTOTAL, CVAR_SOLTRANS, CVAR_TDMEAN,
    CVAR_TMAX, CVAR_TMEAN, CVAR_TMIN, CVAR_VPDMAX, CVAR_VPDMIN,
};
use serde::{Deserialize, Serialize};

/// Climate variable selection for a PRISM request.
///
/// The Explorer form pre-checks precipitation and mean temperature; every
/// other variable starts unchecked. `Default` mirrors the form, so the
/// default selection requires no clicks at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateVariables {
    pub precipitation: bool,
    pub min_temp: bool,
    pub mean_temp: bool,
    pub max_temp: bool,
    pub min_vpd: bool,
    pub max_vpd: bool,
    pub mean_dewpoint_temp: bool,
    pub cloud_transmittance: bool,
    pub solar_rad_horiz_sfc: bool,
    pub solar_rad_sloped_sfc: bool,
    pub solar_rad_clear_sky: bool,
}

impl Default for ClimateVariables {
    fn default() -> Self {
        Self {
            precipitation: true,
            min_temp: false,
            mean_temp: true,
            max_temp: false,
            min_vpd: false,
            max_vpd: false,
            mean_dewpoint_temp: false,
            cloud_transmittance: false,
            solar_rad_horiz_sfc: false,
            solar_rad_sloped_sfc: false,
            solar_rad_clear_sky: false,
        }
    }
}

impl ClimateVariables {
    /// (requested, form default, checkbox element id) for every variable,
    /// in the order the checkboxes appear on the form.
    fn mapping(&self) -> [(bool, bool, &'static str); 11] {
        [
            (self.precipitation, true, CVAR_PPT),
            (self.min_temp, false, CVAR_TMIN),
            (self.mean_temp, true, CVAR_TMEAN),
            (self.max_temp, false, CVAR_TMAX),
            (self.min_vpd, false, CVAR_VPDMIN),
            (self.max_vpd, false, CVAR_VPDMAX),
            (self.mean_dewpoint_temp, false, CVAR_TDMEAN),
            (self.cloud_transmittance, false, CVAR_SOLTRANS),
            (self.solar_rad_horiz_sfc, false, CVAR_SOLTOTAL),
            (self.solar_rad_sloped_sfc, false, CVAR_SOLSLOPE),
            (self.solar_rad_clear_sky, false, CVAR_SOLCLEAR),
        ]
    }

    /// Checkbox element ids whose requested state differs from the form
    /// default. Clicking exactly these, in order, puts the form in the
    /// requested state.
    pub fn toggled_elements(&self) -> Vec<&'static str> {
        self.mapping()
            .iter()
            .filter(|(requested, form_default, _)| requested != form_default)
            .map(|(_, _, element_id)| *element_id)
            .collect()
    }

    /// True if at least one variable is selected.
    pub fn any_selected(&self) -> bool {
        self.mapping().iter().any(|(requested, _, _)| *requested)
    }
}
