//! Static configuration item table.
//!
//! One row per receiver setting reachable through the typed get/set/delete
//! sub-protocol. Bits 28..=30 of every key encode the value storage width
//! and must agree with the declared type; `registry::lookup_by_key` falls
//! back to this size class alone for keys missing from the table.

use super::value::ValueType;

#[derive(Debug)]
pub(crate) struct Entry {
    pub name: &'static str,
    pub key: u32,
    pub ty: ValueType,
    pub scale: f64,
    pub unit: &'static str,
    pub info: &'static str,
}

macro_rules! items {
    ($( $name:literal, $key:literal, $ty:ident, $scale:literal, $unit:literal, $info:literal; )*) => {
        &[ $( Entry {
            name: $name,
            key: $key,
            ty: ValueType::$ty,
            scale: $scale,
            unit: $unit,
            info: $info,
        }, )* ]
    };
}

pub(crate) static ITEMS: &[Entry] = items![
    // ANA — AssistNow Autonomous
    "CFG-ANA-USE_ANA", 0x1023_0001, Bool, 1.0, "", "use AssistNow Autonomous";
    "CFG-ANA-ORBMAXERR", 0x3023_0002, U2, 1.0, "m", "max acceptable modeled orbit error";
    // BATCH — data batching
    "CFG-BATCH-ENABLE", 0x1026_0013, Bool, 1.0, "", "enable data batching";
    "CFG-BATCH-PIOENABLE", 0x1026_0014, Bool, 1.0, "", "enable PIO notification";
    "CFG-BATCH-MAXENTRIES", 0x3026_0015, U2, 1.0, "", "size of buffer in batch entries";
    "CFG-BATCH-WARNTHRS", 0x3026_0016, U2, 1.0, "", "fill level to trigger PIO notification";
    "CFG-BATCH-PIOACTIVELOW", 0x1026_0018, Bool, 1.0, "", "drive PIO low when buffer full";
    "CFG-BATCH-PIOID", 0x2026_0019, U1, 1.0, "", "PIO for batch notification";
    "CFG-BATCH-EXTRAPVT", 0x1026_001a, Bool, 1.0, "", "include extra PVT information";
    "CFG-BATCH-EXTRAODO", 0x1026_001b, Bool, 1.0, "", "include odometer information";
    // GEOFENCE
    "CFG-GEOFENCE-CONFLVL", 0x2024_0011, U1, 1.0, "", "required confidence level";
    "CFG-GEOFENCE-USE_PIO", 0x1024_0012, Bool, 1.0, "", "use PIO combined fence state output";
    "CFG-GEOFENCE-PINPOL", 0x2024_0013, U1, 1.0, "", "PIO pin polarity";
    "CFG-GEOFENCE-PIN", 0x2024_0014, U1, 1.0, "", "PIO pin number";
    "CFG-GEOFENCE-USE_FENCE1", 0x1024_0020, Bool, 1.0, "", "use first geofence";
    "CFG-GEOFENCE-FENCE1_LAT", 0x4024_0021, I4, 1e-7, "deg", "latitude of first geofence center";
    "CFG-GEOFENCE-FENCE1_LON", 0x4024_0022, I4, 1e-7, "deg", "longitude of first geofence center";
    "CFG-GEOFENCE-FENCE1_RAD", 0x4024_0023, U4, 0.01, "m", "radius of first geofence";
    // HW — antenna supervisor
    "CFG-HW-ANT_CFG_VOLTCTRL", 0x10a3_002e, Bool, 1.0, "", "active antenna voltage control";
    "CFG-HW-ANT_CFG_SHORTDET", 0x10a3_002f, Bool, 1.0, "", "short antenna detection";
    "CFG-HW-ANT_CFG_SHORTDET_POL", 0x10a3_0030, Bool, 1.0, "", "short antenna detection polarity";
    "CFG-HW-ANT_CFG_OPENDET", 0x10a3_0031, Bool, 1.0, "", "open antenna detection";
    "CFG-HW-ANT_CFG_OPENDET_POL", 0x10a3_0032, Bool, 1.0, "", "open antenna detection polarity";
    "CFG-HW-ANT_CFG_PWRDOWN", 0x10a3_0033, Bool, 1.0, "", "power down antenna on short";
    "CFG-HW-ANT_CFG_PWRDOWN_POL", 0x10a3_0034, Bool, 1.0, "", "power down polarity";
    "CFG-HW-ANT_CFG_RECOVER", 0x10a3_0035, Bool, 1.0, "", "automatic recovery from short";
    "CFG-HW-ANT_SUP_SWITCH_PIN", 0x20a3_0036, U1, 1.0, "", "antenna switch pin";
    "CFG-HW-ANT_SUP_SHORT_PIN", 0x20a3_0037, U1, 1.0, "", "antenna short detection pin";
    "CFG-HW-ANT_SUP_OPEN_PIN", 0x20a3_0038, U1, 1.0, "", "antenna open detection pin";
    // I2C
    "CFG-I2C-ADDRESS", 0x2051_0001, U1, 1.0, "", "I2C slave address (7 bits)";
    "CFG-I2C-EXTENDEDTIMEOUT", 0x1051_0002, Bool, 1.0, "", "do not disable interface after 1.5 s";
    "CFG-I2C-ENABLED", 0x1051_0003, Bool, 1.0, "", "enable I2C interface";
    "CFG-I2CINPROT-UBX", 0x1071_0001, Bool, 1.0, "", "UBX input on I2C";
    "CFG-I2CINPROT-NMEA", 0x1071_0002, Bool, 1.0, "", "NMEA input on I2C";
    "CFG-I2CINPROT-RTCM3X", 0x1071_0004, Bool, 1.0, "", "RTCM3 input on I2C";
    "CFG-I2COUTPROT-UBX", 0x1072_0001, Bool, 1.0, "", "UBX output on I2C";
    "CFG-I2COUTPROT-NMEA", 0x1072_0002, Bool, 1.0, "", "NMEA output on I2C";
    // INFMSG — information message enables
    "CFG-INFMSG-UBX_I2C", 0x2092_0001, X1, 1.0, "", "information messages, UBX on I2C";
    "CFG-INFMSG-UBX_UART1", 0x2092_0002, X1, 1.0, "", "information messages, UBX on UART1";
    "CFG-INFMSG-UBX_UART2", 0x2092_0003, X1, 1.0, "", "information messages, UBX on UART2";
    "CFG-INFMSG-UBX_USB", 0x2092_0004, X1, 1.0, "", "information messages, UBX on USB";
    "CFG-INFMSG-UBX_SPI", 0x2092_0005, X1, 1.0, "", "information messages, UBX on SPI";
    "CFG-INFMSG-NMEA_I2C", 0x2092_0006, X1, 1.0, "", "information messages, NMEA on I2C";
    "CFG-INFMSG-NMEA_UART1", 0x2092_0007, X1, 1.0, "", "information messages, NMEA on UART1";
    "CFG-INFMSG-NMEA_UART2", 0x2092_0008, X1, 1.0, "", "information messages, NMEA on UART2";
    "CFG-INFMSG-NMEA_USB", 0x2092_0009, X1, 1.0, "", "information messages, NMEA on USB";
    "CFG-INFMSG-NMEA_SPI", 0x2092_000a, X1, 1.0, "", "information messages, NMEA on SPI";
    // ITFM — jamming / interference monitor
    "CFG-ITFM-BBTHRESHOLD", 0x2041_0001, U1, 1.0, "", "broadband jamming detection threshold";
    "CFG-ITFM-CWTHRESHOLD", 0x2041_0002, U1, 1.0, "", "CW jamming detection threshold";
    "CFG-ITFM-ENABLE", 0x1041_000d, Bool, 1.0, "", "enable interference detection";
    "CFG-ITFM-ANTSETTING", 0x2041_0010, U1, 1.0, "", "antenna setting";
    "CFG-ITFM-ENABLE_AUX", 0x1041_0013, Bool, 1.0, "", "scan auxiliary bands";
    // MOT — motion detection
    "CFG-MOT-GNSSSPEED_THRS", 0x2025_0038, U1, 0.01, "m/s", "GNSS speed threshold below which the platform is at rest";
    "CFG-MOT-GNSSDIST_THRS", 0x3025_003b, U2, 1.0, "m", "distance above which GNSS-based stationary motion is exited";
    // MSGOUT — periodic message rates
    "CFG-MSGOUT-UBX_NAV_PVT_I2C", 0x2091_0006, U1, 1.0, "", "output rate of NAV-PVT on I2C";
    "CFG-MSGOUT-UBX_NAV_PVT_UART1", 0x2091_0007, U1, 1.0, "", "output rate of NAV-PVT on UART1";
    "CFG-MSGOUT-UBX_NAV_PVT_UART2", 0x2091_0008, U1, 1.0, "", "output rate of NAV-PVT on UART2";
    "CFG-MSGOUT-UBX_NAV_PVT_USB", 0x2091_0009, U1, 1.0, "", "output rate of NAV-PVT on USB";
    "CFG-MSGOUT-UBX_NAV_PVT_SPI", 0x2091_000a, U1, 1.0, "", "output rate of NAV-PVT on SPI";
    "CFG-MSGOUT-UBX_NAV_SAT_UART1", 0x2091_0016, U1, 1.0, "", "output rate of NAV-SAT on UART1";
    "CFG-MSGOUT-UBX_NAV_SAT_USB", 0x2091_0018, U1, 1.0, "", "output rate of NAV-SAT on USB";
    "CFG-MSGOUT-UBX_NAV_STATUS_UART1", 0x2091_001b, U1, 1.0, "", "output rate of NAV-STATUS on UART1";
    "CFG-MSGOUT-UBX_NAV_POSLLH_I2C", 0x2091_0029, U1, 1.0, "", "output rate of NAV-POSLLH on I2C";
    "CFG-MSGOUT-UBX_NAV_POSLLH_UART1", 0x2091_002a, U1, 1.0, "", "output rate of NAV-POSLLH on UART1";
    "CFG-MSGOUT-UBX_NAV_SVIN_I2C", 0x2091_0088, U1, 1.0, "", "output rate of NAV-SVIN on I2C";
    "CFG-MSGOUT-UBX_NAV_SVIN_UART1", 0x2091_0089, U1, 1.0, "", "output rate of NAV-SVIN on UART1";
    "CFG-MSGOUT-UBX_RXM_SFRBX_I2C", 0x2091_0231, U1, 1.0, "", "output rate of RXM-SFRBX on I2C";
    "CFG-MSGOUT-UBX_RXM_SFRBX_UART1", 0x2091_0232, U1, 1.0, "", "output rate of RXM-SFRBX on UART1";
    "CFG-MSGOUT-UBX_RXM_RAWX_I2C", 0x2091_02a4, U1, 1.0, "", "output rate of RXM-RAWX on I2C";
    "CFG-MSGOUT-UBX_RXM_RAWX_UART1", 0x2091_02a5, U1, 1.0, "", "output rate of RXM-RAWX on UART1";
    "CFG-MSGOUT-NMEA_ID_RMC_I2C", 0x2091_00ab, U1, 1.0, "", "output rate of NMEA RMC on I2C";
    "CFG-MSGOUT-NMEA_ID_RMC_UART1", 0x2091_00ac, U1, 1.0, "", "output rate of NMEA RMC on UART1";
    "CFG-MSGOUT-NMEA_ID_GGA_I2C", 0x2091_00ba, U1, 1.0, "", "output rate of NMEA GGA on I2C";
    "CFG-MSGOUT-NMEA_ID_GGA_UART1", 0x2091_00bb, U1, 1.0, "", "output rate of NMEA GGA on UART1";
    "CFG-MSGOUT-NMEA_ID_GSV_UART1", 0x2091_00c5, U1, 1.0, "", "output rate of NMEA GSV on UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_UART1", 0x2091_02be, U1, 1.0, "", "output rate of RTCM 1005 on UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_UART1", 0x2091_0304, U1, 1.0, "", "output rate of RTCM 1230 on UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_UART1", 0x2091_035f, U1, 1.0, "", "output rate of RTCM 1074 on UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_UART1", 0x2091_0364, U1, 1.0, "", "output rate of RTCM 1084 on UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_UART1", 0x2091_0369, U1, 1.0, "", "output rate of RTCM 1094 on UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_UART1", 0x2091_036e, U1, 1.0, "", "output rate of RTCM 1124 on UART1";
    // NAVHPG — high-precision navigation
    "CFG-NAVHPG-DGNSSMODE", 0x2014_0011, U1, 1.0, "", "differential corrections mode";
    // NAVSPG — standard-precision navigation
    "CFG-NAVSPG-FIXMODE", 0x2011_0011, U1, 1.0, "", "position fix mode";
    "CFG-NAVSPG-INIFIX3D", 0x1011_0013, Bool, 1.0, "", "initial fix must be a 3D fix";
    "CFG-NAVSPG-WKNROLLOVER", 0x3011_0017, U2, 1.0, "", "GPS week rollover number";
    "CFG-NAVSPG-UTCSTANDARD", 0x2011_001c, U1, 1.0, "", "UTC standard to be used";
    "CFG-NAVSPG-DYNMODEL", 0x2011_0021, U1, 1.0, "", "dynamic platform model";
    "CFG-NAVSPG-ACKAIDING", 0x1011_0025, Bool, 1.0, "", "acknowledge assistance input";
    "CFG-NAVSPG-USE_USRDAT", 0x1011_0061, Bool, 1.0, "", "use user geodetic datum";
    "CFG-NAVSPG-INFIL_MINELEV", 0x2011_00a4, I1, 1.0, "deg", "minimum elevation for a GNSS satellite to be used";
    "CFG-NAVSPG-OUTFIL_PDOP", 0x3011_00b1, U2, 0.1, "", "output filter position DOP mask";
    "CFG-NAVSPG-OUTFIL_TDOP", 0x3011_00b2, U2, 0.1, "", "output filter time DOP mask";
    "CFG-NAVSPG-OUTFIL_PACC", 0x3011_00b3, U2, 1.0, "m", "output filter position accuracy mask";
    "CFG-NAVSPG-OUTFIL_TACC", 0x3011_00b4, U2, 1.0, "m", "output filter time accuracy mask";
    "CFG-NAVSPG-CONSTR_ALT", 0x4011_00c1, I4, 0.01, "m", "fixed altitude for 2D mode";
    "CFG-NAVSPG-CONSTR_DGNSSTO", 0x2011_00c4, U1, 1.0, "s", "DGNSS timeout";
    // NMEA — protocol configuration
    "CFG-NMEA-PROTVER", 0x2093_0001, U1, 1.0, "", "NMEA protocol version";
    "CFG-NMEA-MAXSVS", 0x2093_0002, U1, 1.0, "", "maximum number of SVs to report";
    "CFG-NMEA-COMPAT", 0x1093_0003, Bool, 1.0, "", "compatibility mode";
    "CFG-NMEA-CONSIDER", 0x1093_0004, Bool, 1.0, "", "considering mode";
    "CFG-NMEA-LIMIT82", 0x1093_0005, Bool, 1.0, "", "strict 82 character limit";
    "CFG-NMEA-HIGHPREC", 0x1093_0006, Bool, 1.0, "", "high precision mode";
    "CFG-NMEA-SVNUMBERING", 0x2093_0007, U1, 1.0, "", "SV numbering for SVs without NMEA id";
    "CFG-NMEA-FILT_GPS", 0x1093_0011, Bool, 1.0, "", "filter GPS satellites out";
    "CFG-NMEA-FILT_SBAS", 0x1093_0012, Bool, 1.0, "", "filter SBAS satellites out";
    "CFG-NMEA-OUT_INVFIX", 0x1093_0021, Bool, 1.0, "", "output invalid fixes";
    "CFG-NMEA-OUT_INVTIME", 0x1093_0023, Bool, 1.0, "", "output invalid times";
    "CFG-NMEA-OUT_INVDATE", 0x1093_0024, Bool, 1.0, "", "output invalid dates";
    "CFG-NMEA-MAINTALKERID", 0x2093_0031, U1, 1.0, "", "main talker id";
    "CFG-NMEA-GSVTALKERID", 0x2093_0032, U1, 1.0, "", "talker id for GSV messages";
    // ODO — odometer
    "CFG-ODO-USE_ODO", 0x1022_0001, Bool, 1.0, "", "use odometer";
    "CFG-ODO-USE_COG", 0x1022_0002, Bool, 1.0, "", "use low-speed course over ground filter";
    "CFG-ODO-OUTLPVEL", 0x1022_0003, Bool, 1.0, "", "output low-pass filtered velocity";
    "CFG-ODO-OUTLPCOG", 0x1022_0004, Bool, 1.0, "", "output low-pass filtered course over ground";
    "CFG-ODO-PROFILE", 0x2022_0005, U1, 1.0, "", "odometer profile";
    "CFG-ODO-COGMAXSPEED", 0x2022_0021, U1, 1.0, "m/s", "upper speed limit for the COG filter";
    "CFG-ODO-COGMAXPOSACC", 0x2022_0022, U1, 1.0, "m", "maximum position accuracy for the COG filter";
    "CFG-ODO-VELLPGAIN", 0x2022_0031, U1, 1.0, "", "velocity low-pass filter level";
    "CFG-ODO-COGLPGAIN", 0x2022_0032, U1, 1.0, "", "COG low-pass filter level";
    // QZSS
    "CFG-QZSS-USE_SLAS_DGNSS", 0x1037_0005, Bool, 1.0, "", "apply QZSS SLAS corrections";
    "CFG-QZSS-USE_SLAS_TESTMODE", 0x1037_0006, Bool, 1.0, "", "use SLAS data in test mode";
    "CFG-QZSS-USE_SLAS_RAIM_UNCORR", 0x1037_0007, Bool, 1.0, "", "RAIM out measurements not corrected by SLAS";
    // RATE — navigation / measurement rate
    "CFG-RATE-MEAS", 0x3021_0001, U2, 0.001, "s", "nominal time between GNSS measurements";
    "CFG-RATE-NAV", 0x3021_0002, U2, 1.0, "", "measurements per navigation solution";
    "CFG-RATE-TIMEREF", 0x2021_0003, U1, 1.0, "", "time system of the navigation epoch";
    // RINV — remote inventory
    "CFG-RINV-DUMP", 0x10c7_0001, Bool, 1.0, "", "dump inventory on startup";
    "CFG-RINV-BINARY", 0x10c7_0002, Bool, 1.0, "", "inventory is binary, not ASCII";
    "CFG-RINV-DATA_SIZE", 0x20c7_0003, U1, 1.0, "", "inventory data size";
    "CFG-RINV-CHUNK0", 0x50c7_0004, X8, 1.0, "", "inventory bytes 0..=7";
    "CFG-RINV-CHUNK1", 0x50c7_0005, X8, 1.0, "", "inventory bytes 8..=15";
    "CFG-RINV-CHUNK2", 0x50c7_0006, X8, 1.0, "", "inventory bytes 16..=23";
    "CFG-RINV-CHUNK3", 0x50c7_0007, X8, 1.0, "", "inventory bytes 24..=31";
    // RTCM
    "CFG-RTCM-DF003", 0x3009_0001, U2, 1.0, "", "RTCM reference station id";
    // SBAS
    "CFG-SBAS-USE_TESTMODE", 0x1036_0002, Bool, 1.0, "", "use SBAS data in test mode";
    "CFG-SBAS-USE_RANGING", 0x1036_0003, Bool, 1.0, "", "use SBAS satellites for navigation";
    "CFG-SBAS-USE_DIFFCORR", 0x1036_0004, Bool, 1.0, "", "use SBAS differential corrections";
    "CFG-SBAS-USE_INTEGRITY", 0x1036_0005, Bool, 1.0, "", "use SBAS integrity information";
    "CFG-SBAS-PRNSCANMASK", 0x5036_0006, X8, 1.0, "", "SBAS PRN search mask";
    // SEC — security
    "CFG-SEC-CFG_LOCK", 0x10f6_0009, Bool, 1.0, "", "configuration lockdown";
    "CFG-SEC-CFG_LOCK_UNLOCKGRP1", 0x30f6_000a, U2, 1.0, "", "first group unlocked under lockdown";
    "CFG-SEC-CFG_LOCK_UNLOCKGRP2", 0x30f6_000b, U2, 1.0, "", "second group unlocked under lockdown";
    // SIGNAL — constellation / signal enables
    "CFG-SIGNAL-GPS_L1CA_ENA", 0x1031_0001, Bool, 1.0, "", "GPS L1C/A signal enable";
    "CFG-SIGNAL-GPS_L2C_ENA", 0x1031_0003, Bool, 1.0, "", "GPS L2C signal enable";
    "CFG-SIGNAL-SBAS_L1CA_ENA", 0x1031_0005, Bool, 1.0, "", "SBAS L1C/A signal enable";
    "CFG-SIGNAL-GAL_E1_ENA", 0x1031_0007, Bool, 1.0, "", "Galileo E1 signal enable";
    "CFG-SIGNAL-GAL_E5B_ENA", 0x1031_000a, Bool, 1.0, "", "Galileo E5b signal enable";
    "CFG-SIGNAL-BDS_B1_ENA", 0x1031_000d, Bool, 1.0, "", "BeiDou B1I signal enable";
    "CFG-SIGNAL-BDS_B2_ENA", 0x1031_000e, Bool, 1.0, "", "BeiDou B2I signal enable";
    "CFG-SIGNAL-QZSS_L1CA_ENA", 0x1031_0012, Bool, 1.0, "", "QZSS L1C/A signal enable";
    "CFG-SIGNAL-QZSS_L2C_ENA", 0x1031_0015, Bool, 1.0, "", "QZSS L2C signal enable";
    "CFG-SIGNAL-GLO_L1_ENA", 0x1031_0018, Bool, 1.0, "", "GLONASS L1 signal enable";
    "CFG-SIGNAL-GLO_L2_ENA", 0x1031_001a, Bool, 1.0, "", "GLONASS L2 signal enable";
    "CFG-SIGNAL-GPS_ENA", 0x1031_001f, Bool, 1.0, "", "GPS constellation enable";
    "CFG-SIGNAL-SBAS_ENA", 0x1031_0020, Bool, 1.0, "", "SBAS constellation enable";
    "CFG-SIGNAL-GAL_ENA", 0x1031_0021, Bool, 1.0, "", "Galileo constellation enable";
    "CFG-SIGNAL-BDS_ENA", 0x1031_0022, Bool, 1.0, "", "BeiDou constellation enable";
    "CFG-SIGNAL-QZSS_ENA", 0x1031_0024, Bool, 1.0, "", "QZSS constellation enable";
    "CFG-SIGNAL-GLO_ENA", 0x1031_0025, Bool, 1.0, "", "GLONASS constellation enable";
    // SPI
    "CFG-SPI-MAXFF", 0x2064_0001, U1, 1.0, "", "number of 0xFF bytes before deactivating RX";
    "CFG-SPI-CPOLARITY", 0x1064_0002, Bool, 1.0, "", "SPI clock polarity";
    "CFG-SPI-CPHASE", 0x1064_0003, Bool, 1.0, "", "SPI clock phase";
    "CFG-SPI-EXTENDEDTIMEOUT", 0x1064_0005, Bool, 1.0, "", "do not disable interface after 1.5 s";
    "CFG-SPI-ENABLED", 0x1064_0006, Bool, 1.0, "", "enable SPI interface";
    // TMODE — time mode (base station)
    "CFG-TMODE-MODE", 0x2003_0001, U1, 1.0, "", "receiver mode: disabled, survey-in or fixed";
    "CFG-TMODE-POS_TYPE", 0x2003_0002, U1, 1.0, "", "fixed position coordinate representation";
    "CFG-TMODE-ECEF_X", 0x4003_0003, I4, 0.01, "m", "ECEF X coordinate of the fixed position";
    "CFG-TMODE-ECEF_Y", 0x4003_0004, I4, 0.01, "m", "ECEF Y coordinate of the fixed position";
    "CFG-TMODE-ECEF_Z", 0x4003_0005, I4, 0.01, "m", "ECEF Z coordinate of the fixed position";
    "CFG-TMODE-ECEF_X_HP", 0x2003_0006, I1, 0.0001, "m", "high-precision ECEF X component";
    "CFG-TMODE-ECEF_Y_HP", 0x2003_0007, I1, 0.0001, "m", "high-precision ECEF Y component";
    "CFG-TMODE-ECEF_Z_HP", 0x2003_0008, I1, 0.0001, "m", "high-precision ECEF Z component";
    "CFG-TMODE-LAT", 0x4003_0009, I4, 1e-7, "deg", "latitude of the fixed position";
    "CFG-TMODE-LON", 0x4003_000a, I4, 1e-7, "deg", "longitude of the fixed position";
    "CFG-TMODE-HEIGHT", 0x4003_000b, I4, 0.01, "m", "height of the fixed position";
    "CFG-TMODE-LAT_HP", 0x2003_000c, I1, 1e-9, "deg", "high-precision latitude component";
    "CFG-TMODE-LON_HP", 0x2003_000d, I1, 1e-9, "deg", "high-precision longitude component";
    "CFG-TMODE-HEIGHT_HP", 0x2003_000e, I1, 0.0001, "m", "high-precision height component";
    "CFG-TMODE-FIXED_POS_ACC", 0x4003_000f, U4, 0.0001, "m", "fixed position accuracy";
    "CFG-TMODE-SVIN_MIN_DUR", 0x4003_0010, U4, 1.0, "s", "survey-in minimum duration";
    "CFG-TMODE-SVIN_ACC_LIMIT", 0x4003_0011, U4, 0.0001, "m", "survey-in position accuracy limit";
    // TP — time pulse
    "CFG-TP-PERIOD_TP1", 0x4005_0002, U4, 1e-6, "s", "time pulse period";
    "CFG-TP-PERIOD_LOCK_TP1", 0x4005_0003, U4, 1e-6, "s", "time pulse period when locked to GNSS";
    "CFG-TP-LEN_TP1", 0x4005_0004, U4, 1e-6, "s", "time pulse length";
    "CFG-TP-LEN_LOCK_TP1", 0x4005_0005, U4, 1e-6, "s", "time pulse length when locked to GNSS";
    "CFG-TP-TP1_ENA", 0x1005_0007, Bool, 1.0, "", "enable the first time pulse";
    "CFG-TP-SYNC_GNSS_TP1", 0x1005_0008, Bool, 1.0, "", "sync time pulse to GNSS";
    "CFG-TP-USE_LOCKED_TP1", 0x1005_0009, Bool, 1.0, "", "use locked parameters when locked to GNSS";
    "CFG-TP-ALIGN_TO_TOW_TP1", 0x1005_000a, Bool, 1.0, "", "align time pulse to top of second";
    "CFG-TP-POL_TP1", 0x1005_000b, Bool, 1.0, "", "time pulse polarity";
    "CFG-TP-TIMEGRID_TP1", 0x2005_000c, U1, 1.0, "", "time grid for the time pulse";
    // TXREADY
    "CFG-TXREADY-ENABLED", 0x10a2_0001, Bool, 1.0, "", "enable TX-ready pin";
    "CFG-TXREADY-POLARITY", 0x10a2_0002, Bool, 1.0, "", "TX-ready pin polarity";
    "CFG-TXREADY-PIN", 0x20a2_0003, U1, 1.0, "", "TX-ready pin number";
    "CFG-TXREADY-THRESHOLD", 0x30a2_0004, U2, 1.0, "", "TX-ready threshold";
    "CFG-TXREADY-INTERFACE", 0x20a2_0005, U1, 1.0, "", "interface the TX-ready pin serves";
    // UART1
    "CFG-UART1-BAUDRATE", 0x4052_0001, U4, 1.0, "", "UART1 baud rate";
    "CFG-UART1-STOPBITS", 0x2052_0002, U1, 1.0, "", "UART1 stop bits";
    "CFG-UART1-DATABITS", 0x2052_0003, U1, 1.0, "", "UART1 data bits";
    "CFG-UART1-PARITY", 0x2052_0004, U1, 1.0, "", "UART1 parity";
    "CFG-UART1-ENABLED", 0x1052_0005, Bool, 1.0, "", "enable UART1";
    "CFG-UART1INPROT-UBX", 0x1073_0001, Bool, 1.0, "", "UBX input on UART1";
    "CFG-UART1INPROT-NMEA", 0x1073_0002, Bool, 1.0, "", "NMEA input on UART1";
    "CFG-UART1INPROT-RTCM3X", 0x1073_0004, Bool, 1.0, "", "RTCM3 input on UART1";
    "CFG-UART1OUTPROT-UBX", 0x1074_0001, Bool, 1.0, "", "UBX output on UART1";
    "CFG-UART1OUTPROT-NMEA", 0x1074_0002, Bool, 1.0, "", "NMEA output on UART1";
    "CFG-UART1OUTPROT-RTCM3X", 0x1074_0004, Bool, 1.0, "", "RTCM3 output on UART1";
    // UART2
    "CFG-UART2-BAUDRATE", 0x4053_0001, U4, 1.0, "", "UART2 baud rate";
    "CFG-UART2-STOPBITS", 0x2053_0002, U1, 1.0, "", "UART2 stop bits";
    "CFG-UART2-DATABITS", 0x2053_0003, U1, 1.0, "", "UART2 data bits";
    "CFG-UART2-PARITY", 0x2053_0004, U1, 1.0, "", "UART2 parity";
    "CFG-UART2-ENABLED", 0x1053_0005, Bool, 1.0, "", "enable UART2";
    "CFG-UART2-REMAP", 0x1053_0006, Bool, 1.0, "", "remap UART2 to the UART1 pins";
    "CFG-UART2INPROT-UBX", 0x1075_0001, Bool, 1.0, "", "UBX input on UART2";
    "CFG-UART2INPROT-NMEA", 0x1075_0002, Bool, 1.0, "", "NMEA input on UART2";
    "CFG-UART2INPROT-RTCM3X", 0x1075_0004, Bool, 1.0, "", "RTCM3 input on UART2";
    "CFG-UART2OUTPROT-UBX", 0x1076_0001, Bool, 1.0, "", "UBX output on UART2";
    "CFG-UART2OUTPROT-NMEA", 0x1076_0002, Bool, 1.0, "", "NMEA output on UART2";
    "CFG-UART2OUTPROT-RTCM3X", 0x1076_0004, Bool, 1.0, "", "RTCM3 output on UART2";
    // USB
    "CFG-USB-ENABLED", 0x1065_0001, Bool, 1.0, "", "enable the USB interface";
    "CFG-USB-SELFPOW", 0x1065_0002, Bool, 1.0, "", "self-powered device";
    "CFG-USB-VENDOR_ID", 0x3065_000a, U2, 1.0, "", "USB vendor id";
    "CFG-USB-PRODUCT_ID", 0x3065_000b, U2, 1.0, "", "USB product id";
    "CFG-USB-POWER", 0x3065_000c, U2, 1.0, "mA", "power consumption";
    "CFG-USBINPROT-UBX", 0x1077_0001, Bool, 1.0, "", "UBX input on USB";
    "CFG-USBINPROT-NMEA", 0x1077_0002, Bool, 1.0, "", "NMEA input on USB";
    "CFG-USBINPROT-RTCM3X", 0x1077_0004, Bool, 1.0, "", "RTCM3 input on USB";
    "CFG-USBOUTPROT-UBX", 0x1078_0001, Bool, 1.0, "", "UBX output on USB";
    "CFG-USBOUTPROT-NMEA", 0x1078_0002, Bool, 1.0, "", "NMEA output on USB";
    "CFG-USBOUTPROT-RTCM3X", 0x1078_0004, Bool, 1.0, "", "RTCM3 output on USB";
];
