//! Built-in LMS reference rows.
//!
//! Rows follow the WHO Child Growth Standards from birth to 24 months and the
//! CDC 2000 growth charts from 24 to 240 months, abridged to monthly rows in
//! the first year, quarterly rows to 24 months and yearly rows after 36 months.
//! Values are rounded and abridged; load the official published tables into a
//! [`ReferenceTable`](crate::ReferenceTable) for clinical use.

use crate::reference::{LmsRow, ReferenceSeries, SeriesEntry};
use crate::{Metric, Sex};

pub(crate) const STANDARD_SERIES: &[SeriesEntry] = &[
    SeriesEntry::new(Sex::Male, Metric::Weight, ReferenceSeries::from_static(MALE_WEIGHT)),
    SeriesEntry::new(Sex::Female, Metric::Weight, ReferenceSeries::from_static(FEMALE_WEIGHT)),
    SeriesEntry::new(Sex::Male, Metric::Height, ReferenceSeries::from_static(MALE_HEIGHT)),
    SeriesEntry::new(Sex::Female, Metric::Height, ReferenceSeries::from_static(FEMALE_HEIGHT)),
    SeriesEntry::new(Sex::Male, Metric::Bmi, ReferenceSeries::from_static(MALE_BMI)),
    SeriesEntry::new(Sex::Female, Metric::Bmi, ReferenceSeries::from_static(FEMALE_BMI)),
    SeriesEntry::new(Sex::Male, Metric::HeadCircumference, ReferenceSeries::from_static(MALE_HEAD_CIRCUMFERENCE)),
    SeriesEntry::new(Sex::Female, Metric::HeadCircumference, ReferenceSeries::from_static(FEMALE_HEAD_CIRCUMFERENCE)),
];

/// Weight-for-age, boys (kg).
const MALE_WEIGHT: &[LmsRow] = &[
    LmsRow::new(0, 0.3487, 3.3464, 0.14602),
    LmsRow::new(1, 0.2297, 4.4709, 0.13395),
    LmsRow::new(2, 0.1970, 5.5675, 0.12385),
    LmsRow::new(3, 0.1738, 6.3762, 0.11727),
    LmsRow::new(4, 0.1553, 7.0023, 0.11316),
    LmsRow::new(5, 0.1395, 7.5105, 0.11080),
    LmsRow::new(6, 0.1257, 7.9340, 0.10958),
    LmsRow::new(7, 0.1134, 8.2970, 0.10902),
    LmsRow::new(8, 0.1021, 8.6151, 0.10882),
    LmsRow::new(9, 0.0917, 8.9014, 0.10881),
    LmsRow::new(10, 0.0820, 9.1649, 0.10891),
    LmsRow::new(11, 0.0730, 9.4122, 0.10906),
    LmsRow::new(12, 0.0644, 9.6479, 0.10925),
    LmsRow::new(15, 0.0409, 10.3108, 0.10994),
    LmsRow::new(18, 0.0196, 10.9385, 0.11070),
    LmsRow::new(21, 0.0001, 11.5486, 0.11154),
    LmsRow::new(24, -0.0137, 12.1515, 0.11236),
    LmsRow::new(30, -0.2613, 13.6823, 0.10784),
    LmsRow::new(36, -0.3831, 14.3470, 0.10749),
    LmsRow::new(48, -0.6960, 16.3000, 0.11310),
    LmsRow::new(60, -0.9585, 18.4000, 0.12090),
    LmsRow::new(72, -1.1364, 20.7000, 0.13050),
    LmsRow::new(84, -1.2120, 23.0000, 0.14060),
    LmsRow::new(96, -1.1939, 25.6000, 0.15020),
    LmsRow::new(108, -1.1108, 28.5000, 0.15820),
    LmsRow::new(120, -0.9946, 31.9000, 0.16380),
    LmsRow::new(132, -0.8692, 35.6000, 0.16690),
    LmsRow::new(144, -0.7481, 40.0000, 0.16720),
    LmsRow::new(156, -0.6373, 45.0000, 0.16490),
    LmsRow::new(168, -0.5385, 50.8000, 0.16030),
    LmsRow::new(180, -0.4519, 56.0000, 0.15410),
    LmsRow::new(192, -0.3762, 60.8000, 0.14710),
    LmsRow::new(204, -0.3097, 64.5000, 0.14010),
    LmsRow::new(216, -0.2510, 67.2000, 0.13360),
    LmsRow::new(228, -0.1982, 69.0000, 0.12810),
    LmsRow::new(240, -0.1504, 70.6000, 0.12400),
];

/// Weight-for-age, girls (kg).
const FEMALE_WEIGHT: &[LmsRow] = &[
    LmsRow::new(0, 0.3809, 3.2322, 0.14171),
    LmsRow::new(1, 0.1714, 4.1873, 0.13724),
    LmsRow::new(2, 0.0962, 5.1282, 0.13000),
    LmsRow::new(3, 0.0402, 5.8458, 0.12619),
    LmsRow::new(4, -0.0050, 6.4237, 0.12402),
    LmsRow::new(5, -0.0430, 6.8985, 0.12274),
    LmsRow::new(6, -0.0756, 7.2970, 0.12204),
    LmsRow::new(7, -0.1039, 7.6422, 0.12178),
    LmsRow::new(8, -0.1288, 7.9487, 0.12181),
    LmsRow::new(9, -0.1507, 8.2254, 0.12199),
    LmsRow::new(10, -0.1700, 8.4800, 0.12223),
    LmsRow::new(11, -0.1872, 8.7192, 0.12247),
    LmsRow::new(12, -0.2024, 8.9481, 0.12268),
    LmsRow::new(15, -0.2372, 9.6008, 0.12342),
    LmsRow::new(18, -0.2637, 10.2315, 0.12400),
    LmsRow::new(21, -0.2842, 10.8584, 0.12460),
    LmsRow::new(24, -0.2998, 11.4775, 0.12527),
    LmsRow::new(30, -0.4512, 13.0930, 0.11780),
    LmsRow::new(36, -0.5640, 13.9000, 0.12150),
    LmsRow::new(48, -0.8120, 15.9000, 0.12980),
    LmsRow::new(60, -1.0120, 18.0000, 0.13910),
    LmsRow::new(72, -1.1510, 20.2000, 0.14870),
    LmsRow::new(84, -1.2220, 22.6000, 0.15770),
    LmsRow::new(96, -1.2300, 25.4000, 0.16520),
    LmsRow::new(108, -1.1840, 28.6000, 0.17040),
    LmsRow::new(120, -1.0960, 32.5000, 0.17260),
    LmsRow::new(132, -0.9800, 37.0000, 0.17130),
    LmsRow::new(144, -0.8510, 41.6000, 0.16680),
    LmsRow::new(156, -0.7220, 45.8000, 0.16030),
    LmsRow::new(168, -0.6010, 49.4000, 0.15300),
    LmsRow::new(180, -0.4930, 52.0000, 0.14630),
    LmsRow::new(192, -0.3990, 53.8000, 0.14110),
    LmsRow::new(204, -0.3190, 55.0000, 0.13760),
    LmsRow::new(216, -0.2510, 56.0000, 0.13570),
    LmsRow::new(228, -0.1930, 56.9000, 0.13500),
    LmsRow::new(240, -0.1430, 57.7000, 0.13510),
];

/// Length-for-age to 24 months, stature-for-age after, boys (cm).
const MALE_HEIGHT: &[LmsRow] = &[
    LmsRow::new(0, 1.0, 49.8842, 0.03795),
    LmsRow::new(1, 1.0, 54.7244, 0.03557),
    LmsRow::new(2, 1.0, 58.4249, 0.03424),
    LmsRow::new(3, 1.0, 61.4292, 0.03328),
    LmsRow::new(4, 1.0, 63.8860, 0.03257),
    LmsRow::new(5, 1.0, 65.9026, 0.03204),
    LmsRow::new(6, 1.0, 67.6236, 0.03165),
    LmsRow::new(7, 1.0, 69.1645, 0.03139),
    LmsRow::new(8, 1.0, 70.5994, 0.03124),
    LmsRow::new(9, 1.0, 71.9687, 0.03117),
    LmsRow::new(10, 1.0, 73.2812, 0.03118),
    LmsRow::new(11, 1.0, 74.5388, 0.03125),
    LmsRow::new(12, 1.0, 75.7488, 0.03137),
    LmsRow::new(15, 1.0, 79.1458, 0.03189),
    LmsRow::new(18, 1.0, 82.2587, 0.03245),
    LmsRow::new(21, 1.0, 85.1348, 0.03303),
    LmsRow::new(24, 1.0, 87.8161, 0.03359),
    LmsRow::new(30, 1.0, 91.9000, 0.03640),
    LmsRow::new(36, 1.0, 95.3000, 0.03800),
    LmsRow::new(48, 1.0, 102.5000, 0.04100),
    LmsRow::new(60, 1.0, 109.2000, 0.04180),
    LmsRow::new(72, 1.0, 115.7000, 0.04240),
    LmsRow::new(84, 1.0, 122.0000, 0.04280),
    LmsRow::new(96, 1.0, 128.0000, 0.04310),
    LmsRow::new(108, 1.0, 133.7000, 0.04350),
    LmsRow::new(120, 1.0, 138.8000, 0.04420),
    LmsRow::new(132, 1.0, 143.7000, 0.04560),
    LmsRow::new(144, 1.0, 149.3000, 0.04750),
    LmsRow::new(156, 1.0, 156.0000, 0.04860),
    LmsRow::new(168, 1.0, 163.2000, 0.04720),
    LmsRow::new(180, 1.0, 169.0000, 0.04360),
    LmsRow::new(192, 1.0, 173.0000, 0.04040),
    LmsRow::new(204, 1.0, 175.2000, 0.03850),
    LmsRow::new(216, 1.0, 176.1000, 0.03770),
    LmsRow::new(228, 1.0, 176.5000, 0.03740),
    LmsRow::new(240, 1.0, 176.8000, 0.03730),
];

/// Length-for-age to 24 months, stature-for-age after, girls (cm).
const FEMALE_HEIGHT: &[LmsRow] = &[
    LmsRow::new(0, 1.0, 49.1477, 0.03790),
    LmsRow::new(1, 1.0, 53.6872, 0.03640),
    LmsRow::new(2, 1.0, 57.0673, 0.03568),
    LmsRow::new(3, 1.0, 59.8029, 0.03520),
    LmsRow::new(4, 1.0, 62.0899, 0.03486),
    LmsRow::new(5, 1.0, 64.0301, 0.03463),
    LmsRow::new(6, 1.0, 65.7311, 0.03448),
    LmsRow::new(7, 1.0, 67.2873, 0.03441),
    LmsRow::new(8, 1.0, 68.7498, 0.03440),
    LmsRow::new(9, 1.0, 70.1435, 0.03444),
    LmsRow::new(10, 1.0, 71.4818, 0.03452),
    LmsRow::new(11, 1.0, 72.7710, 0.03464),
    LmsRow::new(12, 1.0, 74.0150, 0.03479),
    LmsRow::new(15, 1.0, 77.5299, 0.03528),
    LmsRow::new(18, 1.0, 80.7079, 0.03578),
    LmsRow::new(21, 1.0, 83.6654, 0.03630),
    LmsRow::new(24, 1.0, 86.4153, 0.03680),
    LmsRow::new(30, 1.0, 90.7000, 0.03900),
    LmsRow::new(36, 1.0, 94.2000, 0.04000),
    LmsRow::new(48, 1.0, 101.6000, 0.04120),
    LmsRow::new(60, 1.0, 108.4000, 0.04220),
    LmsRow::new(72, 1.0, 115.0000, 0.04300),
    LmsRow::new(84, 1.0, 121.4000, 0.04370),
    LmsRow::new(96, 1.0, 127.4000, 0.04440),
    LmsRow::new(108, 1.0, 133.1000, 0.04530),
    LmsRow::new(120, 1.0, 138.6000, 0.04640),
    LmsRow::new(132, 1.0, 144.8000, 0.04700),
    LmsRow::new(144, 1.0, 151.2000, 0.04600),
    LmsRow::new(156, 1.0, 156.5000, 0.04310),
    LmsRow::new(168, 1.0, 159.7000, 0.04030),
    LmsRow::new(180, 1.0, 161.7000, 0.03850),
    LmsRow::new(192, 1.0, 162.5000, 0.03770),
    LmsRow::new(204, 1.0, 163.0000, 0.03740),
    LmsRow::new(216, 1.0, 163.3000, 0.03730),
    LmsRow::new(228, 1.0, 163.5000, 0.03730),
    LmsRow::new(240, 1.0, 163.7000, 0.03730),
];

/// BMI-for-age, boys (kg/m²).
const MALE_BMI: &[LmsRow] = &[
    LmsRow::new(0, -0.3053, 13.4069, 0.09560),
    LmsRow::new(1, 0.2708, 14.9441, 0.09027),
    LmsRow::new(2, 0.1118, 16.3195, 0.08677),
    LmsRow::new(3, 0.0068, 16.8987, 0.08495),
    LmsRow::new(4, -0.0727, 17.1579, 0.08378),
    LmsRow::new(5, -0.1370, 17.2919, 0.08296),
    LmsRow::new(6, -0.1913, 17.3422, 0.08234),
    LmsRow::new(7, -0.2385, 17.3288, 0.08183),
    LmsRow::new(8, -0.2802, 17.2647, 0.08140),
    LmsRow::new(9, -0.3176, 17.1662, 0.08102),
    LmsRow::new(10, -0.3516, 17.0488, 0.08068),
    LmsRow::new(11, -0.3828, 16.9239, 0.08037),
    LmsRow::new(12, -0.4115, 16.7981, 0.08009),
    LmsRow::new(15, -0.4870, 16.4433, 0.07944),
    LmsRow::new(18, -0.5498, 16.1470, 0.07900),
    LmsRow::new(21, -0.6028, 15.9222, 0.07875),
    LmsRow::new(24, -0.6187, 16.0189, 0.07785),
    LmsRow::new(30, -1.7000, 15.9000, 0.07800),
    LmsRow::new(36, -1.8000, 15.7700, 0.08000),
    LmsRow::new(48, -2.0100, 15.5200, 0.08400),
    LmsRow::new(60, -2.2100, 15.3800, 0.09000),
    LmsRow::new(72, -2.3700, 15.3900, 0.09700),
    LmsRow::new(84, -2.4700, 15.5600, 0.10500),
    LmsRow::new(96, -2.5200, 15.8700, 0.11300),
    LmsRow::new(108, -2.5300, 16.2900, 0.12000),
    LmsRow::new(120, -2.5000, 16.7900, 0.12600),
    LmsRow::new(132, -2.4400, 17.3500, 0.13000),
    LmsRow::new(144, -2.3500, 17.9600, 0.13200),
    LmsRow::new(156, -2.2500, 18.5900, 0.13300),
    LmsRow::new(168, -2.1300, 19.2200, 0.13300),
    LmsRow::new(180, -2.0100, 19.8400, 0.13200),
    LmsRow::new(192, -1.8900, 20.4600, 0.13100),
    LmsRow::new(204, -1.7700, 21.0500, 0.13000),
    LmsRow::new(216, -1.6500, 21.6200, 0.13000),
    LmsRow::new(228, -1.5400, 22.1700, 0.13000),
    LmsRow::new(240, -1.4300, 22.6800, 0.13100),
];

/// BMI-for-age, girls (kg/m²).
const FEMALE_BMI: &[LmsRow] = &[
    LmsRow::new(0, -0.0631, 13.3363, 0.09272),
    LmsRow::new(1, 0.3448, 14.5679, 0.09556),
    LmsRow::new(2, 0.1749, 15.7679, 0.09371),
    LmsRow::new(3, 0.0643, 16.3574, 0.09180),
    LmsRow::new(4, -0.0191, 16.6703, 0.09017),
    LmsRow::new(5, -0.0864, 16.8386, 0.08890),
    LmsRow::new(6, -0.1429, 16.9083, 0.08791),
    LmsRow::new(7, -0.1916, 16.9020, 0.08711),
    LmsRow::new(8, -0.2344, 16.8404, 0.08645),
    LmsRow::new(9, -0.2725, 16.7406, 0.08590),
    LmsRow::new(10, -0.3068, 16.6184, 0.08542),
    LmsRow::new(11, -0.3381, 16.4875, 0.08501),
    LmsRow::new(12, -0.3667, 16.3568, 0.08465),
    LmsRow::new(15, -0.4402, 15.9910, 0.08378),
    LmsRow::new(18, -0.5016, 15.7136, 0.08330),
    LmsRow::new(21, -0.5537, 15.5318, 0.08311),
    LmsRow::new(24, -0.5684, 15.6881, 0.08454),
    LmsRow::new(30, -1.3000, 15.6000, 0.08400),
    LmsRow::new(36, -1.2000, 15.4800, 0.08600),
    LmsRow::new(48, -1.1000, 15.2400, 0.09200),
    LmsRow::new(60, -1.0200, 15.1500, 0.10000),
    LmsRow::new(72, -1.0800, 15.2300, 0.10900),
    LmsRow::new(84, -1.1800, 15.4700, 0.11800),
    LmsRow::new(96, -1.3000, 15.8500, 0.12600),
    LmsRow::new(108, -1.4000, 16.3300, 0.13300),
    LmsRow::new(120, -1.4700, 16.9000, 0.13800),
    LmsRow::new(132, -1.5000, 17.5300, 0.14100),
    LmsRow::new(144, -1.5100, 18.1700, 0.14200),
    LmsRow::new(156, -1.5000, 18.7900, 0.14200),
    LmsRow::new(168, -1.4700, 19.3600, 0.14100),
    LmsRow::new(180, -1.4400, 19.8600, 0.14000),
    LmsRow::new(192, -1.4100, 20.2900, 0.13900),
    LmsRow::new(204, -1.3800, 20.6600, 0.13900),
    LmsRow::new(216, -1.3600, 21.0000, 0.14000),
    LmsRow::new(228, -1.3400, 21.3300, 0.14100),
    LmsRow::new(240, -1.3300, 21.6700, 0.14300),
];

/// Head circumference-for-age, boys (cm). Authored to 36 months only.
const MALE_HEAD_CIRCUMFERENCE: &[LmsRow] = &[
    LmsRow::new(0, 1.0, 34.4618, 0.03686),
    LmsRow::new(1, 1.0, 37.2759, 0.03133),
    LmsRow::new(2, 1.0, 39.1285, 0.02997),
    LmsRow::new(3, 1.0, 40.5135, 0.02918),
    LmsRow::new(4, 1.0, 41.6317, 0.02868),
    LmsRow::new(5, 1.0, 42.5576, 0.02837),
    LmsRow::new(6, 1.0, 43.3306, 0.02817),
    LmsRow::new(7, 1.0, 43.9803, 0.02804),
    LmsRow::new(8, 1.0, 44.5300, 0.02796),
    LmsRow::new(9, 1.0, 44.9998, 0.02792),
    LmsRow::new(10, 1.0, 45.4051, 0.02790),
    LmsRow::new(11, 1.0, 45.7573, 0.02789),
    LmsRow::new(12, 1.0, 46.0661, 0.02789),
    LmsRow::new(15, 1.0, 46.8060, 0.02791),
    LmsRow::new(18, 1.0, 47.4057, 0.02798),
    LmsRow::new(21, 1.0, 47.8927, 0.02808),
    LmsRow::new(24, 1.0, 48.2515, 0.02819),
    LmsRow::new(30, 1.0, 48.9834, 0.02847),
    LmsRow::new(36, 1.0, 49.5164, 0.02876),
];

/// Head circumference-for-age, girls (cm). Authored to 36 months only.
const FEMALE_HEAD_CIRCUMFERENCE: &[LmsRow] = &[
    LmsRow::new(0, 1.0, 33.8787, 0.03496),
    LmsRow::new(1, 1.0, 36.5463, 0.03210),
    LmsRow::new(2, 1.0, 38.2521, 0.03168),
    LmsRow::new(3, 1.0, 39.5328, 0.03140),
    LmsRow::new(4, 1.0, 40.5817, 0.03119),
    LmsRow::new(5, 1.0, 41.4590, 0.03102),
    LmsRow::new(6, 1.0, 42.1995, 0.03087),
    LmsRow::new(7, 1.0, 42.8290, 0.03075),
    LmsRow::new(8, 1.0, 43.3671, 0.03063),
    LmsRow::new(9, 1.0, 43.8300, 0.03053),
    LmsRow::new(10, 1.0, 44.2319, 0.03044),
    LmsRow::new(11, 1.0, 44.5844, 0.03035),
    LmsRow::new(12, 1.0, 44.8965, 0.03027),
    LmsRow::new(15, 1.0, 45.6551, 0.03008),
    LmsRow::new(18, 1.0, 46.2421, 0.02995),
    LmsRow::new(21, 1.0, 46.7301, 0.02985),
    LmsRow::new(24, 1.0, 47.1516, 0.02977),
    LmsRow::new(30, 1.0, 47.8627, 0.02965),
    LmsRow::new(36, 1.0, 48.4475, 0.02956),
];
