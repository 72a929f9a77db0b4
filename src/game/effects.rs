/// Transient effect flags with expiry expressed in ticks. An effect is
/// active iff the current tick is below its expiry, checked once per tick,
/// so no deferred timers can outlive a restart.
#[derive(Clone, Debug, Default)]
pub struct ActiveEffects {
    phasing_until: Option<u64>,
    disco_until: Option<u64>,
    speed_boost_until: Option<u64>,
}

impl ActiveEffects {
    pub fn expire(&mut self, tick: u64) {
        for slot in [
            &mut self.phasing_until,
            &mut self.disco_until,
            &mut self.speed_boost_until,
        ] {
            if (*slot).is_some_and(|until| tick >= until) {
                *slot = None;
            }
        }
    }

    pub fn set_phasing(&mut self, until: u64) {
        self.phasing_until = Some(until);
    }

    pub fn set_disco(&mut self, until: u64) {
        self.disco_until = Some(until);
    }

    pub fn set_speed_boost(&mut self, until: u64) {
        self.speed_boost_until = Some(until);
    }

    pub fn phasing_active(&self) -> bool {
        self.phasing_until.is_some()
    }

    pub fn disco_active(&self) -> bool {
        self.disco_until.is_some()
    }

    pub fn speed_boost_active(&self) -> bool {
        self.speed_boost_until.is_some()
    }
}
