//! RFC 3454 Table B.2: the case-folding map used together with NFKC.
//!
//! Each entry maps one code point to a replacement sequence of one to four
//! scalar values, stored here as a UTF-8 string. The table is sorted by key
//! and searched with a plain binary search; everything is materialized at
//! compile time.
//!
//! Applying this map *before* normalization is what keeps the codec on the
//! lower-case folding RFC 3454 mandates, independent of whatever case
//! behavior the host NFKC implementation has.

/// Sorted `(code point, replacement)` pairs from RFC 3454 Table B.2.
#[rustfmt::skip]
pub(crate) const B_2: &[(u32, &str)] = &[
    (0x0041, "a"), (0x0042, "b"), (0x0043, "c"), (0x0044, "d"), (0x0045, "e"),
    (0x0046, "f"), (0x0047, "g"), (0x0048, "h"), (0x0049, "i"), (0x004A, "j"),
    (0x004B, "k"), (0x004C, "l"), (0x004D, "m"), (0x004E, "n"), (0x004F, "o"),
    (0x0050, "p"), (0x0051, "q"), (0x0052, "r"), (0x0053, "s"), (0x0054, "t"),
    (0x0055, "u"), (0x0056, "v"), (0x0057, "w"), (0x0058, "x"), (0x0059, "y"),
    (0x005A, "z"), (0x00B5, "\u{3BC}"), (0x00C0, "\u{E0}"), (0x00C1, "\u{E1}"),
    (0x00C2, "\u{E2}"), (0x00C3, "\u{E3}"), (0x00C4, "\u{E4}"), (0x00C5, "\u{E5}"),
    (0x00C6, "\u{E6}"), (0x00C7, "\u{E7}"), (0x00C8, "\u{E8}"), (0x00C9, "\u{E9}"),
    (0x00CA, "\u{EA}"), (0x00CB, "\u{EB}"), (0x00CC, "\u{EC}"), (0x00CD, "\u{ED}"),
    (0x00CE, "\u{EE}"), (0x00CF, "\u{EF}"), (0x00D0, "\u{F0}"), (0x00D1, "\u{F1}"),
    (0x00D2, "\u{F2}"), (0x00D3, "\u{F3}"), (0x00D4, "\u{F4}"), (0x00D5, "\u{F5}"),
    (0x00D6, "\u{F6}"), (0x00D8, "\u{F8}"), (0x00D9, "\u{F9}"), (0x00DA, "\u{FA}"),
    (0x00DB, "\u{FB}"), (0x00DC, "\u{FC}"), (0x00DD, "\u{FD}"), (0x00DE, "\u{FE}"),
    (0x00DF, "ss"), (0x0100, "\u{101}"), (0x0102, "\u{103}"), (0x0104, "\u{105}"),
    (0x0106, "\u{107}"), (0x0108, "\u{109}"), (0x010A, "\u{10B}"), (0x010C, "\u{10D}"),
    (0x010E, "\u{10F}"), (0x0110, "\u{111}"), (0x0112, "\u{113}"), (0x0114, "\u{115}"),
    (0x0116, "\u{117}"), (0x0118, "\u{119}"), (0x011A, "\u{11B}"), (0x011C, "\u{11D}"),
    (0x011E, "\u{11F}"), (0x0120, "\u{121}"), (0x0122, "\u{123}"), (0x0124, "\u{125}"),
    (0x0126, "\u{127}"), (0x0128, "\u{129}"), (0x012A, "\u{12B}"), (0x012C, "\u{12D}"),
    (0x012E, "\u{12F}"), (0x0130, "i\u{307}"), (0x0132, "\u{133}"), (0x0134, "\u{135}"),
    (0x0136, "\u{137}"), (0x0139, "\u{13A}"), (0x013B, "\u{13C}"), (0x013D, "\u{13E}"),
    (0x013F, "\u{140}"), (0x0141, "\u{142}"), (0x0143, "\u{144}"), (0x0145, "\u{146}"),
    (0x0147, "\u{148}"), (0x0149, "\u{2BC}n"), (0x014A, "\u{14B}"), (0x014C, "\u{14D}"),
    (0x014E, "\u{14F}"), (0x0150, "\u{151}"), (0x0152, "\u{153}"), (0x0154, "\u{155}"),
    (0x0156, "\u{157}"), (0x0158, "\u{159}"), (0x015A, "\u{15B}"), (0x015C, "\u{15D}"),
    (0x015E, "\u{15F}"), (0x0160, "\u{161}"), (0x0162, "\u{163}"), (0x0164, "\u{165}"),
    (0x0166, "\u{167}"), (0x0168, "\u{169}"), (0x016A, "\u{16B}"), (0x016C, "\u{16D}"),
    (0x016E, "\u{16F}"), (0x0170, "\u{171}"), (0x0172, "\u{173}"), (0x0174, "\u{175}"),
    (0x0176, "\u{177}"), (0x0178, "\u{FF}"), (0x0179, "\u{17A}"), (0x017B, "\u{17C}"),
    (0x017D, "\u{17E}"), (0x017F, "s"), (0x0181, "\u{253}"), (0x0182, "\u{183}"),
    (0x0184, "\u{185}"), (0x0186, "\u{254}"), (0x0187, "\u{188}"), (0x0189, "\u{256}"),
    (0x018A, "\u{257}"), (0x018B, "\u{18C}"), (0x018E, "\u{1DD}"), (0x018F, "\u{259}"),
    (0x0190, "\u{25B}"), (0x0191, "\u{192}"), (0x0193, "\u{260}"), (0x0194, "\u{263}"),
    (0x0196, "\u{269}"), (0x0197, "\u{268}"), (0x0198, "\u{199}"), (0x019C, "\u{26F}"),
    (0x019D, "\u{272}"), (0x019F, "\u{275}"), (0x01A0, "\u{1A1}"), (0x01A2, "\u{1A3}"),
    (0x01A4, "\u{1A5}"), (0x01A6, "\u{280}"), (0x01A7, "\u{1A8}"), (0x01A9, "\u{283}"),
    (0x01AC, "\u{1AD}"), (0x01AE, "\u{288}"), (0x01AF, "\u{1B0}"), (0x01B1, "\u{28A}"),
    (0x01B2, "\u{28B}"), (0x01B3, "\u{1B4}"), (0x01B5, "\u{1B6}"), (0x01B7, "\u{292}"),
    (0x01B8, "\u{1B9}"), (0x01BC, "\u{1BD}"), (0x01C4, "\u{1C6}"), (0x01C5, "\u{1C6}"),
    (0x01C7, "\u{1C9}"), (0x01C8, "\u{1C9}"), (0x01CA, "\u{1CC}"), (0x01CB, "\u{1CC}"),
    (0x01CD, "\u{1CE}"), (0x01CF, "\u{1D0}"), (0x01D1, "\u{1D2}"), (0x01D3, "\u{1D4}"),
    (0x01D5, "\u{1D6}"), (0x01D7, "\u{1D8}"), (0x01D9, "\u{1DA}"), (0x01DB, "\u{1DC}"),
    (0x01DE, "\u{1DF}"), (0x01E0, "\u{1E1}"), (0x01E2, "\u{1E3}"), (0x01E4, "\u{1E5}"),
    (0x01E6, "\u{1E7}"), (0x01E8, "\u{1E9}"), (0x01EA, "\u{1EB}"), (0x01EC, "\u{1ED}"),
    (0x01EE, "\u{1EF}"), (0x01F0, "j\u{30C}"), (0x01F1, "\u{1F3}"), (0x01F2, "\u{1F3}"),
    (0x01F4, "\u{1F5}"), (0x01F6, "\u{195}"), (0x01F7, "\u{1BF}"), (0x01F8, "\u{1F9}"),
    (0x01FA, "\u{1FB}"), (0x01FC, "\u{1FD}"), (0x01FE, "\u{1FF}"), (0x0200, "\u{201}"),
    (0x0202, "\u{203}"), (0x0204, "\u{205}"), (0x0206, "\u{207}"), (0x0208, "\u{209}"),
    (0x020A, "\u{20B}"), (0x020C, "\u{20D}"), (0x020E, "\u{20F}"), (0x0210, "\u{211}"),
    (0x0212, "\u{213}"), (0x0214, "\u{215}"), (0x0216, "\u{217}"), (0x0218, "\u{219}"),
    (0x021A, "\u{21B}"), (0x021C, "\u{21D}"), (0x021E, "\u{21F}"), (0x0220, "\u{19E}"),
    (0x0222, "\u{223}"), (0x0224, "\u{225}"), (0x0226, "\u{227}"), (0x0228, "\u{229}"),
    (0x022A, "\u{22B}"), (0x022C, "\u{22D}"), (0x022E, "\u{22F}"), (0x0230, "\u{231}"),
    (0x0232, "\u{233}"), (0x0345, "\u{3B9}"), (0x037A, " \u{3B9}"), (0x0386, "\u{3AC}"),
    (0x0388, "\u{3AD}"), (0x0389, "\u{3AE}"), (0x038A, "\u{3AF}"), (0x038C, "\u{3CC}"),
    (0x038E, "\u{3CD}"), (0x038F, "\u{3CE}"), (0x0390, "\u{3B9}\u{308}\u{301}"),
    (0x0391, "\u{3B1}"), (0x0392, "\u{3B2}"), (0x0393, "\u{3B3}"), (0x0394, "\u{3B4}"),
    (0x0395, "\u{3B5}"), (0x0396, "\u{3B6}"), (0x0397, "\u{3B7}"), (0x0398, "\u{3B8}"),
    (0x0399, "\u{3B9}"), (0x039A, "\u{3BA}"), (0x039B, "\u{3BB}"), (0x039C, "\u{3BC}"),
    (0x039D, "\u{3BD}"), (0x039E, "\u{3BE}"), (0x039F, "\u{3BF}"), (0x03A0, "\u{3C0}"),
    (0x03A1, "\u{3C1}"), (0x03A3, "\u{3C3}"), (0x03A4, "\u{3C4}"), (0x03A5, "\u{3C5}"),
    (0x03A6, "\u{3C6}"), (0x03A7, "\u{3C7}"), (0x03A8, "\u{3C8}"), (0x03A9, "\u{3C9}"),
    (0x03AA, "\u{3CA}"), (0x03AB, "\u{3CB}"), (0x03B0, "\u{3C5}\u{308}\u{301}"),
    (0x03C2, "\u{3C3}"), (0x03D0, "\u{3B2}"), (0x03D1, "\u{3B8}"), (0x03D2, "\u{3C5}"),
    (0x03D3, "\u{3CD}"), (0x03D4, "\u{3CB}"), (0x03D5, "\u{3C6}"), (0x03D6, "\u{3C0}"),
    (0x03D8, "\u{3D9}"), (0x03DA, "\u{3DB}"), (0x03DC, "\u{3DD}"), (0x03DE, "\u{3DF}"),
    (0x03E0, "\u{3E1}"), (0x03E2, "\u{3E3}"), (0x03E4, "\u{3E5}"), (0x03E6, "\u{3E7}"),
    (0x03E8, "\u{3E9}"), (0x03EA, "\u{3EB}"), (0x03EC, "\u{3ED}"), (0x03EE, "\u{3EF}"),
    (0x03F0, "\u{3BA}"), (0x03F1, "\u{3C1}"), (0x03F2, "\u{3C3}"), (0x03F4, "\u{3B8}"),
    (0x03F5, "\u{3B5}"), (0x0400, "\u{450}"), (0x0401, "\u{451}"), (0x0402, "\u{452}"),
    (0x0403, "\u{453}"), (0x0404, "\u{454}"), (0x0405, "\u{455}"), (0x0406, "\u{456}"),
    (0x0407, "\u{457}"), (0x0408, "\u{458}"), (0x0409, "\u{459}"), (0x040A, "\u{45A}"),
    (0x040B, "\u{45B}"), (0x040C, "\u{45C}"), (0x040D, "\u{45D}"), (0x040E, "\u{45E}"),
    (0x040F, "\u{45F}"), (0x0410, "\u{430}"), (0x0411, "\u{431}"), (0x0412, "\u{432}"),
    (0x0413, "\u{433}"), (0x0414, "\u{434}"), (0x0415, "\u{435}"), (0x0416, "\u{436}"),
    (0x0417, "\u{437}"), (0x0418, "\u{438}"), (0x0419, "\u{439}"), (0x041A, "\u{43A}"),
    (0x041B, "\u{43B}"), (0x041C, "\u{43C}"), (0x041D, "\u{43D}"), (0x041E, "\u{43E}"),
    (0x041F, "\u{43F}"), (0x0420, "\u{440}"), (0x0421, "\u{441}"), (0x0422, "\u{442}"),
    (0x0423, "\u{443}"), (0x0424, "\u{444}"), (0x0425, "\u{445}"), (0x0426, "\u{446}"),
    (0x0427, "\u{447}"), (0x0428, "\u{448}"), (0x0429, "\u{449}"), (0x042A, "\u{44A}"),
    (0x042B, "\u{44B}"), (0x042C, "\u{44C}"), (0x042D, "\u{44D}"), (0x042E, "\u{44E}"),
    (0x042F, "\u{44F}"), (0x0460, "\u{461}"), (0x0462, "\u{463}"), (0x0464, "\u{465}"),
    (0x0466, "\u{467}"), (0x0468, "\u{469}"), (0x046A, "\u{46B}"), (0x046C, "\u{46D}"),
    (0x046E, "\u{46F}"), (0x0470, "\u{471}"), (0x0472, "\u{473}"), (0x0474, "\u{475}"),
    (0x0476, "\u{477}"), (0x0478, "\u{479}"), (0x047A, "\u{47B}"), (0x047C, "\u{47D}"),
    (0x047E, "\u{47F}"), (0x0480, "\u{481}"), (0x048A, "\u{48B}"), (0x048C, "\u{48D}"),
    (0x048E, "\u{48F}"), (0x0490, "\u{491}"), (0x0492, "\u{493}"), (0x0494, "\u{495}"),
    (0x0496, "\u{497}"), (0x0498, "\u{499}"), (0x049A, "\u{49B}"), (0x049C, "\u{49D}"),
    (0x049E, "\u{49F}"), (0x04A0, "\u{4A1}"), (0x04A2, "\u{4A3}"), (0x04A4, "\u{4A5}"),
    (0x04A6, "\u{4A7}"), (0x04A8, "\u{4A9}"), (0x04AA, "\u{4AB}"), (0x04AC, "\u{4AD}"),
    (0x04AE, "\u{4AF}"), (0x04B0, "\u{4B1}"), (0x04B2, "\u{4B3}"), (0x04B4, "\u{4B5}"),
    (0x04B6, "\u{4B7}"), (0x04B8, "\u{4B9}"), (0x04BA, "\u{4BB}"), (0x04BC, "\u{4BD}"),
    (0x04BE, "\u{4BF}"), (0x04C1, "\u{4C2}"), (0x04C3, "\u{4C4}"), (0x04C5, "\u{4C6}"),
    (0x04C7, "\u{4C8}"), (0x04C9, "\u{4CA}"), (0x04CB, "\u{4CC}"), (0x04CD, "\u{4CE}"),
    (0x04D0, "\u{4D1}"), (0x04D2, "\u{4D3}"), (0x04D4, "\u{4D5}"), (0x04D6, "\u{4D7}"),
    (0x04D8, "\u{4D9}"), (0x04DA, "\u{4DB}"), (0x04DC, "\u{4DD}"), (0x04DE, "\u{4DF}"),
    (0x04E0, "\u{4E1}"), (0x04E2, "\u{4E3}"), (0x04E4, "\u{4E5}"), (0x04E6, "\u{4E7}"),
    (0x04E8, "\u{4E9}"), (0x04EA, "\u{4EB}"), (0x04EC, "\u{4ED}"), (0x04EE, "\u{4EF}"),
    (0x04F0, "\u{4F1}"), (0x04F2, "\u{4F3}"), (0x04F4, "\u{4F5}"), (0x04F8, "\u{4F9}"),
    (0x0500, "\u{501}"), (0x0502, "\u{503}"), (0x0504, "\u{505}"), (0x0506, "\u{507}"),
    (0x0508, "\u{509}"), (0x050A, "\u{50B}"), (0x050C, "\u{50D}"), (0x050E, "\u{50F}"),
    (0x0531, "\u{561}"), (0x0532, "\u{562}"), (0x0533, "\u{563}"), (0x0534, "\u{564}"),
    (0x0535, "\u{565}"), (0x0536, "\u{566}"), (0x0537, "\u{567}"), (0x0538, "\u{568}"),
    (0x0539, "\u{569}"), (0x053A, "\u{56A}"), (0x053B, "\u{56B}"), (0x053C, "\u{56C}"),
    (0x053D, "\u{56D}"), (0x053E, "\u{56E}"), (0x053F, "\u{56F}"), (0x0540, "\u{570}"),
    (0x0541, "\u{571}"), (0x0542, "\u{572}"), (0x0543, "\u{573}"), (0x0544, "\u{574}"),
    (0x0545, "\u{575}"), (0x0546, "\u{576}"), (0x0547, "\u{577}"), (0x0548, "\u{578}"),
    (0x0549, "\u{579}"), (0x054A, "\u{57A}"), (0x054B, "\u{57B}"), (0x054C, "\u{57C}"),
    (0x054D, "\u{57D}"), (0x054E, "\u{57E}"), (0x054F, "\u{57F}"), (0x0550, "\u{580}"),
    (0x0551, "\u{581}"), (0x0552, "\u{582}"), (0x0553, "\u{583}"), (0x0554, "\u{584}"),
    (0x0555, "\u{585}"), (0x0556, "\u{586}"), (0x0587, "\u{565}\u{582}"),
    (0x1E00, "\u{1E01}"), (0x1E02, "\u{1E03}"), (0x1E04, "\u{1E05}"), (0x1E06, "\u{1E07}"),
    (0x1E08, "\u{1E09}"), (0x1E0A, "\u{1E0B}"), (0x1E0C, "\u{1E0D}"), (0x1E0E, "\u{1E0F}"),
    (0x1E10, "\u{1E11}"), (0x1E12, "\u{1E13}"), (0x1E14, "\u{1E15}"), (0x1E16, "\u{1E17}"),
    (0x1E18, "\u{1E19}"), (0x1E1A, "\u{1E1B}"), (0x1E1C, "\u{1E1D}"), (0x1E1E, "\u{1E1F}"),
    (0x1E20, "\u{1E21}"), (0x1E22, "\u{1E23}"), (0x1E24, "\u{1E25}"), (0x1E26, "\u{1E27}"),
    (0x1E28, "\u{1E29}"), (0x1E2A, "\u{1E2B}"), (0x1E2C, "\u{1E2D}"), (0x1E2E, "\u{1E2F}"),
    (0x1E30, "\u{1E31}"), (0x1E32, "\u{1E33}"), (0x1E34, "\u{1E35}"), (0x1E36, "\u{1E37}"),
    (0x1E38, "\u{1E39}"), (0x1E3A, "\u{1E3B}"), (0x1E3C, "\u{1E3D}"), (0x1E3E, "\u{1E3F}"),
    (0x1E40, "\u{1E41}"), (0x1E42, "\u{1E43}"), (0x1E44, "\u{1E45}"), (0x1E46, "\u{1E47}"),
    (0x1E48, "\u{1E49}"), (0x1E4A, "\u{1E4B}"), (0x1E4C, "\u{1E4D}"), (0x1E4E, "\u{1E4F}"),
    (0x1E50, "\u{1E51}"), (0x1E52, "\u{1E53}"), (0x1E54, "\u{1E55}"), (0x1E56, "\u{1E57}"),
    (0x1E58, "\u{1E59}"), (0x1E5A, "\u{1E5B}"), (0x1E5C, "\u{1E5D}"), (0x1E5E, "\u{1E5F}"),
    (0x1E60, "\u{1E61}"), (0x1E62, "\u{1E63}"), (0x1E64, "\u{1E65}"), (0x1E66, "\u{1E67}"),
    (0x1E68, "\u{1E69}"), (0x1E6A, "\u{1E6B}"), (0x1E6C, "\u{1E6D}"), (0x1E6E, "\u{1E6F}"),
    (0x1E70, "\u{1E71}"), (0x1E72, "\u{1E73}"), (0x1E74, "\u{1E75}"), (0x1E76, "\u{1E77}"),
    (0x1E78, "\u{1E79}"), (0x1E7A, "\u{1E7B}"), (0x1E7C, "\u{1E7D}"), (0x1E7E, "\u{1E7F}"),
    (0x1E80, "\u{1E81}"), (0x1E82, "\u{1E83}"), (0x1E84, "\u{1E85}"), (0x1E86, "\u{1E87}"),
    (0x1E88, "\u{1E89}"), (0x1E8A, "\u{1E8B}"), (0x1E8C, "\u{1E8D}"), (0x1E8E, "\u{1E8F}"),
    (0x1E90, "\u{1E91}"), (0x1E92, "\u{1E93}"), (0x1E94, "\u{1E95}"), (0x1E96, "h\u{331}"),
    (0x1E97, "t\u{308}"), (0x1E98, "w\u{30A}"), (0x1E99, "y\u{30A}"), (0x1E9A, "a\u{2BE}"),
    (0x1E9B, "\u{1E61}"), (0x1EA0, "\u{1EA1}"), (0x1EA2, "\u{1EA3}"), (0x1EA4, "\u{1EA5}"),
    (0x1EA6, "\u{1EA7}"), (0x1EA8, "\u{1EA9}"), (0x1EAA, "\u{1EAB}"), (0x1EAC, "\u{1EAD}"),
    (0x1EAE, "\u{1EAF}"), (0x1EB0, "\u{1EB1}"), (0x1EB2, "\u{1EB3}"), (0x1EB4, "\u{1EB5}"),
    (0x1EB6, "\u{1EB7}"), (0x1EB8, "\u{1EB9}"), (0x1EBA, "\u{1EBB}"), (0x1EBC, "\u{1EBD}"),
    (0x1EBE, "\u{1EBF}"), (0x1EC0, "\u{1EC1}"), (0x1EC2, "\u{1EC3}"), (0x1EC4, "\u{1EC5}"),
    (0x1EC6, "\u{1EC7}"), (0x1EC8, "\u{1EC9}"), (0x1ECA, "\u{1ECB}"), (0x1ECC, "\u{1ECD}"),
    (0x1ECE, "\u{1ECF}"), (0x1ED0, "\u{1ED1}"), (0x1ED2, "\u{1ED3}"), (0x1ED4, "\u{1ED5}"),
    (0x1ED6, "\u{1ED7}"), (0x1ED8, "\u{1ED9}"), (0x1EDA, "\u{1EDB}"), (0x1EDC, "\u{1EDD}"),
    (0x1EDE, "\u{1EDF}"), (0x1EE0, "\u{1EE1}"), (0x1EE2, "\u{1EE3}"), (0x1EE4, "\u{1EE5}"),
    (0x1EE6, "\u{1EE7}"), (0x1EE8, "\u{1EE9}"), (0x1EEA, "\u{1EEB}"), (0x1EEC, "\u{1EED}"),
    (0x1EEE, "\u{1EEF}"), (0x1EF0, "\u{1EF1}"), (0x1EF2, "\u{1EF3}"), (0x1EF4, "\u{1EF5}"),
    (0x1EF6, "\u{1EF7}"), (0x1EF8, "\u{1EF9}"), (0x1F08, "\u{1F00}"), (0x1F09, "\u{1F01}"),
    (0x1F0A, "\u{1F02}"), (0x1F0B, "\u{1F03}"), (0x1F0C, "\u{1F04}"), (0x1F0D, "\u{1F05}"),
    (0x1F0E, "\u{1F06}"), (0x1F0F, "\u{1F07}"), (0x1F18, "\u{1F10}"), (0x1F19, "\u{1F11}"),
    (0x1F1A, "\u{1F12}"), (0x1F1B, "\u{1F13}"), (0x1F1C, "\u{1F14}"), (0x1F1D, "\u{1F15}"),
    (0x1F28, "\u{1F20}"), (0x1F29, "\u{1F21}"), (0x1F2A, "\u{1F22}"), (0x1F2B, "\u{1F23}"),
    (0x1F2C, "\u{1F24}"), (0x1F2D, "\u{1F25}"), (0x1F2E, "\u{1F26}"), (0x1F2F, "\u{1F27}"),
    (0x1F38, "\u{1F30}"), (0x1F39, "\u{1F31}"), (0x1F3A, "\u{1F32}"), (0x1F3B, "\u{1F33}"),
    (0x1F3C, "\u{1F34}"), (0x1F3D, "\u{1F35}"), (0x1F3E, "\u{1F36}"), (0x1F3F, "\u{1F37}"),
    (0x1F48, "\u{1F40}"), (0x1F49, "\u{1F41}"), (0x1F4A, "\u{1F42}"), (0x1F4B, "\u{1F43}"),
    (0x1F4C, "\u{1F44}"), (0x1F4D, "\u{1F45}"), (0x1F50, "\u{3C5}\u{313}"),
    (0x1F52, "\u{3C5}\u{313}\u{300}"), (0x1F54, "\u{3C5}\u{313}\u{301}"),
    (0x1F56, "\u{3C5}\u{313}\u{342}"), (0x1F59, "\u{1F51}"), (0x1F5B, "\u{1F53}"),
    (0x1F5D, "\u{1F55}"), (0x1F5F, "\u{1F57}"), (0x1F68, "\u{1F60}"), (0x1F69, "\u{1F61}"),
    (0x1F6A, "\u{1F62}"), (0x1F6B, "\u{1F63}"), (0x1F6C, "\u{1F64}"), (0x1F6D, "\u{1F65}"),
    (0x1F6E, "\u{1F66}"), (0x1F6F, "\u{1F67}"), (0x1F80, "\u{1F00}\u{3B9}"),
    (0x1F81, "\u{1F01}\u{3B9}"), (0x1F82, "\u{1F02}\u{3B9}"), (0x1F83, "\u{1F03}\u{3B9}"),
    (0x1F84, "\u{1F04}\u{3B9}"), (0x1F85, "\u{1F05}\u{3B9}"), (0x1F86, "\u{1F06}\u{3B9}"),
    (0x1F87, "\u{1F07}\u{3B9}"), (0x1F88, "\u{1F00}\u{3B9}"), (0x1F89, "\u{1F01}\u{3B9}"),
    (0x1F8A, "\u{1F02}\u{3B9}"), (0x1F8B, "\u{1F03}\u{3B9}"), (0x1F8C, "\u{1F04}\u{3B9}"),
    (0x1F8D, "\u{1F05}\u{3B9}"), (0x1F8E, "\u{1F06}\u{3B9}"), (0x1F8F, "\u{1F07}\u{3B9}"),
    (0x1F90, "\u{1F20}\u{3B9}"), (0x1F91, "\u{1F21}\u{3B9}"), (0x1F92, "\u{1F22}\u{3B9}"),
    (0x1F93, "\u{1F23}\u{3B9}"), (0x1F94, "\u{1F24}\u{3B9}"), (0x1F95, "\u{1F25}\u{3B9}"),
    (0x1F96, "\u{1F26}\u{3B9}"), (0x1F97, "\u{1F27}\u{3B9}"), (0x1F98, "\u{1F20}\u{3B9}"),
    (0x1F99, "\u{1F21}\u{3B9}"), (0x1F9A, "\u{1F22}\u{3B9}"), (0x1F9B, "\u{1F23}\u{3B9}"),
    (0x1F9C, "\u{1F24}\u{3B9}"), (0x1F9D, "\u{1F25}\u{3B9}"), (0x1F9E, "\u{1F26}\u{3B9}"),
    (0x1F9F, "\u{1F27}\u{3B9}"), (0x1FA0, "\u{1F60}\u{3B9}"), (0x1FA1, "\u{1F61}\u{3B9}"),
    (0x1FA2, "\u{1F62}\u{3B9}"), (0x1FA3, "\u{1F63}\u{3B9}"), (0x1FA4, "\u{1F64}\u{3B9}"),
    (0x1FA5, "\u{1F65}\u{3B9}"), (0x1FA6, "\u{1F66}\u{3B9}"), (0x1FA7, "\u{1F67}\u{3B9}"),
    (0x1FA8, "\u{1F60}\u{3B9}"), (0x1FA9, "\u{1F61}\u{3B9}"), (0x1FAA, "\u{1F62}\u{3B9}"),
    (0x1FAB, "\u{1F63}\u{3B9}"), (0x1FAC, "\u{1F64}\u{3B9}"), (0x1FAD, "\u{1F65}\u{3B9}"),
    (0x1FAE, "\u{1F66}\u{3B9}"), (0x1FAF, "\u{1F67}\u{3B9}"), (0x1FB2, "\u{1F70}\u{3B9}"),
    (0x1FB3, "\u{3B1}\u{3B9}"), (0x1FB4, "\u{3AC}\u{3B9}"), (0x1FB6, "\u{3B1}\u{342}"),
    (0x1FB7, "\u{3B1}\u{342}\u{3B9}"), (0x1FB8, "\u{1FB0}"), (0x1FB9, "\u{1FB1}"),
    (0x1FBA, "\u{1F70}"), (0x1FBB, "\u{1F71}"), (0x1FBC, "\u{3B1}\u{3B9}"),
    (0x1FBE, "\u{3B9}"), (0x1FC2, "\u{1F74}\u{3B9}"), (0x1FC3, "\u{3B7}\u{3B9}"),
    (0x1FC4, "\u{3AE}\u{3B9}"), (0x1FC6, "\u{3B7}\u{342}"),
    (0x1FC7, "\u{3B7}\u{342}\u{3B9}"), (0x1FC8, "\u{1F72}"), (0x1FC9, "\u{1F73}"),
    (0x1FCA, "\u{1F74}"), (0x1FCB, "\u{1F75}"), (0x1FCC, "\u{3B7}\u{3B9}"),
    (0x1FD2, "\u{3B9}\u{308}\u{300}"), (0x1FD3, "\u{3B9}\u{308}\u{301}"),
    (0x1FD6, "\u{3B9}\u{342}"), (0x1FD7, "\u{3B9}\u{308}\u{342}"), (0x1FD8, "\u{1FD0}"),
    (0x1FD9, "\u{1FD1}"), (0x1FDA, "\u{1F76}"), (0x1FDB, "\u{1F77}"),
    (0x1FE2, "\u{3C5}\u{308}\u{300}"), (0x1FE3, "\u{3C5}\u{308}\u{301}"),
    (0x1FE4, "\u{3C1}\u{313}"), (0x1FE6, "\u{3C5}\u{342}"),
    (0x1FE7, "\u{3C5}\u{308}\u{342}"), (0x1FE8, "\u{1FE0}"), (0x1FE9, "\u{1FE1}"),
    (0x1FEA, "\u{1F7A}"), (0x1FEB, "\u{1F7B}"), (0x1FEC, "\u{1FE5}"),
    (0x1FF2, "\u{1F7C}\u{3B9}"), (0x1FF3, "\u{3C9}\u{3B9}"), (0x1FF4, "\u{3CE}\u{3B9}"),
    (0x1FF6, "\u{3C9}\u{342}"), (0x1FF7, "\u{3C9}\u{342}\u{3B9}"), (0x1FF8, "\u{1F78}"),
    (0x1FF9, "\u{1F79}"), (0x1FFA, "\u{1F7C}"), (0x1FFB, "\u{1F7D}"),
    (0x1FFC, "\u{3C9}\u{3B9}"), (0x20A8, "rs"), (0x2102, "c"), (0x2103, "\u{B0}c"),
    (0x2107, "\u{25B}"), (0x2109, "\u{B0}f"), (0x210B, "h"), (0x210C, "h"), (0x210D, "h"),
    (0x2110, "i"), (0x2111, "i"), (0x2112, "l"), (0x2115, "n"), (0x2116, "no"),
    (0x2119, "p"), (0x211A, "q"), (0x211B, "r"), (0x211C, "r"), (0x211D, "r"),
    (0x2120, "sm"), (0x2121, "tel"), (0x2122, "tm"), (0x2124, "z"), (0x2126, "\u{3C9}"),
    (0x2128, "z"), (0x212A, "k"), (0x212B, "\u{E5}"), (0x212C, "b"), (0x212D, "c"),
    (0x2130, "e"), (0x2131, "f"), (0x2133, "m"), (0x213E, "\u{3B3}"), (0x213F, "\u{3C0}"),
    (0x2145, "d"), (0x2160, "\u{2170}"), (0x2161, "\u{2171}"), (0x2162, "\u{2172}"),
    (0x2163, "\u{2173}"), (0x2164, "\u{2174}"), (0x2165, "\u{2175}"), (0x2166, "\u{2176}"),
    (0x2167, "\u{2177}"), (0x2168, "\u{2178}"), (0x2169, "\u{2179}"), (0x216A, "\u{217A}"),
    (0x216B, "\u{217B}"), (0x216C, "\u{217C}"), (0x216D, "\u{217D}"), (0x216E, "\u{217E}"),
    (0x216F, "\u{217F}"), (0x24B6, "\u{24D0}"), (0x24B7, "\u{24D1}"), (0x24B8, "\u{24D2}"),
    (0x24B9, "\u{24D3}"), (0x24BA, "\u{24D4}"), (0x24BB, "\u{24D5}"), (0x24BC, "\u{24D6}"),
    (0x24BD, "\u{24D7}"), (0x24BE, "\u{24D8}"), (0x24BF, "\u{24D9}"), (0x24C0, "\u{24DA}"),
    (0x24C1, "\u{24DB}"), (0x24C2, "\u{24DC}"), (0x24C3, "\u{24DD}"), (0x24C4, "\u{24DE}"),
    (0x24C5, "\u{24DF}"), (0x24C6, "\u{24E0}"), (0x24C7, "\u{24E1}"), (0x24C8, "\u{24E2}"),
    (0x24C9, "\u{24E3}"), (0x24CA, "\u{24E4}"), (0x24CB, "\u{24E5}"), (0x24CC, "\u{24E6}"),
    (0x24CD, "\u{24E7}"), (0x24CE, "\u{24E8}"), (0x24CF, "\u{24E9}"), (0x3371, "hpa"),
    (0x3373, "au"), (0x3375, "ov"), (0x3380, "pa"), (0x3381, "na"), (0x3382, "\u{3BC}a"),
    (0x3383, "ma"), (0x3384, "ka"), (0x3385, "kb"), (0x3386, "mb"), (0x3387, "gb"),
    (0x338A, "pf"), (0x338B, "nf"), (0x338C, "\u{3BC}f"), (0x3390, "hz"), (0x3391, "khz"),
    (0x3392, "mhz"), (0x3393, "ghz"), (0x3394, "thz"), (0x33A9, "pa"), (0x33AA, "kpa"),
    (0x33AB, "mpa"), (0x33AC, "gpa"), (0x33B4, "pv"), (0x33B5, "nv"), (0x33B6, "\u{3BC}v"),
    (0x33B7, "mv"), (0x33B8, "kv"), (0x33B9, "mv"), (0x33BA, "pw"), (0x33BB, "nw"),
    (0x33BC, "\u{3BC}w"), (0x33BD, "mw"), (0x33BE, "kw"), (0x33BF, "mw"),
    (0x33C0, "k\u{3C9}"), (0x33C1, "m\u{3C9}"), (0x33C3, "bq"), (0x33C6, "c\u{2215}kg"),
    (0x33C7, "co."), (0x33C8, "db"), (0x33C9, "gy"), (0x33CB, "hp"), (0x33CD, "kk"),
    (0x33CE, "km"), (0x33D7, "ph"), (0x33D9, "ppm"), (0x33DA, "pr"), (0x33DC, "sv"),
    (0x33DD, "wb"), (0xFB00, "ff"), (0xFB01, "fi"), (0xFB02, "fl"), (0xFB03, "ffi"),
    (0xFB04, "ffl"), (0xFB05, "st"), (0xFB06, "st"), (0xFB13, "\u{574}\u{576}"),
    (0xFB14, "\u{574}\u{565}"), (0xFB15, "\u{574}\u{56B}"), (0xFB16, "\u{57E}\u{576}"),
    (0xFB17, "\u{574}\u{56D}"), (0xFF21, "\u{FF41}"), (0xFF22, "\u{FF42}"),
    (0xFF23, "\u{FF43}"), (0xFF24, "\u{FF44}"), (0xFF25, "\u{FF45}"), (0xFF26, "\u{FF46}"),
    (0xFF27, "\u{FF47}"), (0xFF28, "\u{FF48}"), (0xFF29, "\u{FF49}"), (0xFF2A, "\u{FF4A}"),
    (0xFF2B, "\u{FF4B}"), (0xFF2C, "\u{FF4C}"), (0xFF2D, "\u{FF4D}"), (0xFF2E, "\u{FF4E}"),
    (0xFF2F, "\u{FF4F}"), (0xFF30, "\u{FF50}"), (0xFF31, "\u{FF51}"), (0xFF32, "\u{FF52}"),
    (0xFF33, "\u{FF53}"), (0xFF34, "\u{FF54}"), (0xFF35, "\u{FF55}"), (0xFF36, "\u{FF56}"),
    (0xFF37, "\u{FF57}"), (0xFF38, "\u{FF58}"), (0xFF39, "\u{FF59}"), (0xFF3A, "\u{FF5A}"),
    (0x10400, "\u{10428}"), (0x10401, "\u{10429}"), (0x10402, "\u{1042A}"),
    (0x10403, "\u{1042B}"), (0x10404, "\u{1042C}"), (0x10405, "\u{1042D}"),
    (0x10406, "\u{1042E}"), (0x10407, "\u{1042F}"), (0x10408, "\u{10430}"),
    (0x10409, "\u{10431}"), (0x1040A, "\u{10432}"), (0x1040B, "\u{10433}"),
    (0x1040C, "\u{10434}"), (0x1040D, "\u{10435}"), (0x1040E, "\u{10436}"),
    (0x1040F, "\u{10437}"), (0x10410, "\u{10438}"), (0x10411, "\u{10439}"),
    (0x10412, "\u{1043A}"), (0x10413, "\u{1043B}"), (0x10414, "\u{1043C}"),
    (0x10415, "\u{1043D}"), (0x10416, "\u{1043E}"), (0x10417, "\u{1043F}"),
    (0x10418, "\u{10440}"), (0x10419, "\u{10441}"), (0x1041A, "\u{10442}"),
    (0x1041B, "\u{10443}"), (0x1041C, "\u{10444}"), (0x1041D, "\u{10445}"),
    (0x1041E, "\u{10446}"), (0x1041F, "\u{10447}"), (0x10420, "\u{10448}"),
    (0x10421, "\u{10449}"), (0x10422, "\u{1044A}"), (0x10423, "\u{1044B}"),
    (0x10424, "\u{1044C}"), (0x10425, "\u{1044D}"), (0x1D400, "a"), (0x1D401, "b"),
    (0x1D402, "c"), (0x1D403, "d"), (0x1D404, "e"), (0x1D405, "f"), (0x1D406, "g"),
    (0x1D407, "h"), (0x1D408, "i"), (0x1D409, "j"), (0x1D40A, "k"), (0x1D40B, "l"),
    (0x1D40C, "m"), (0x1D40D, "n"), (0x1D40E, "o"), (0x1D40F, "p"), (0x1D410, "q"),
    (0x1D411, "r"), (0x1D412, "s"), (0x1D413, "t"), (0x1D414, "u"), (0x1D415, "v"),
    (0x1D416, "w"), (0x1D417, "x"), (0x1D418, "y"), (0x1D419, "z"), (0x1D434, "a"),
    (0x1D435, "b"), (0x1D436, "c"), (0x1D437, "d"), (0x1D438, "e"), (0x1D439, "f"),
    (0x1D43A, "g"), (0x1D43B, "h"), (0x1D43C, "i"), (0x1D43D, "j"), (0x1D43E, "k"),
    (0x1D43F, "l"), (0x1D440, "m"), (0x1D441, "n"), (0x1D442, "o"), (0x1D443, "p"),
    (0x1D444, "q"), (0x1D445, "r"), (0x1D446, "s"), (0x1D447, "t"), (0x1D448, "u"),
    (0x1D449, "v"), (0x1D44A, "w"), (0x1D44B, "x"), (0x1D44C, "y"), (0x1D44D, "z"),
    (0x1D468, "a"), (0x1D469, "b"), (0x1D46A, "c"), (0x1D46B, "d"), (0x1D46C, "e"),
    (0x1D46D, "f"), (0x1D46E, "g"), (0x1D46F, "h"), (0x1D470, "i"), (0x1D471, "j"),
    (0x1D472, "k"), (0x1D473, "l"), (0x1D474, "m"), (0x1D475, "n"), (0x1D476, "o"),
    (0x1D477, "p"), (0x1D478, "q"), (0x1D479, "r"), (0x1D47A, "s"), (0x1D47B, "t"),
    (0x1D47C, "u"), (0x1D47D, "v"), (0x1D47E, "w"), (0x1D47F, "x"), (0x1D480, "y"),
    (0x1D481, "z"), (0x1D49C, "a"), (0x1D49E, "c"), (0x1D49F, "d"), (0x1D4A2, "g"),
    (0x1D4A5, "j"), (0x1D4A6, "k"), (0x1D4A9, "n"), (0x1D4AA, "o"), (0x1D4AB, "p"),
    (0x1D4AC, "q"), (0x1D4AE, "s"), (0x1D4AF, "t"), (0x1D4B0, "u"), (0x1D4B1, "v"),
    (0x1D4B2, "w"), (0x1D4B3, "x"), (0x1D4B4, "y"), (0x1D4B5, "z"), (0x1D4D0, "a"),
    (0x1D4D1, "b"), (0x1D4D2, "c"), (0x1D4D3, "d"), (0x1D4D4, "e"), (0x1D4D5, "f"),
    (0x1D4D6, "g"), (0x1D4D7, "h"), (0x1D4D8, "i"), (0x1D4D9, "j"), (0x1D4DA, "k"),
    (0x1D4DB, "l"), (0x1D4DC, "m"), (0x1D4DD, "n"), (0x1D4DE, "o"), (0x1D4DF, "p"),
    (0x1D4E0, "q"), (0x1D4E1, "r"), (0x1D4E2, "s"), (0x1D4E3, "t"), (0x1D4E4, "u"),
    (0x1D4E5, "v"), (0x1D4E6, "w"), (0x1D4E7, "x"), (0x1D4E8, "y"), (0x1D4E9, "z"),
    (0x1D504, "a"), (0x1D505, "b"), (0x1D507, "d"), (0x1D508, "e"), (0x1D509, "f"),
    (0x1D50A, "g"), (0x1D50D, "j"), (0x1D50E, "k"), (0x1D50F, "l"), (0x1D510, "m"),
    (0x1D511, "n"), (0x1D512, "o"), (0x1D513, "p"), (0x1D514, "q"), (0x1D516, "s"),
    (0x1D517, "t"), (0x1D518, "u"), (0x1D519, "v"), (0x1D51A, "w"), (0x1D51B, "x"),
    (0x1D51C, "y"), (0x1D538, "a"), (0x1D539, "b"), (0x1D53B, "d"), (0x1D53C, "e"),
    (0x1D53D, "f"), (0x1D53E, "g"), (0x1D540, "i"), (0x1D541, "j"), (0x1D542, "k"),
    (0x1D543, "l"), (0x1D544, "m"), (0x1D546, "o"), (0x1D54A, "s"), (0x1D54B, "t"),
    (0x1D54C, "u"), (0x1D54D, "v"), (0x1D54E, "w"), (0x1D54F, "x"), (0x1D550, "y"),
    (0x1D56C, "a"), (0x1D56D, "b"), (0x1D56E, "c"), (0x1D56F, "d"), (0x1D570, "e"),
    (0x1D571, "f"), (0x1D572, "g"), (0x1D573, "h"), (0x1D574, "i"), (0x1D575, "j"),
    (0x1D576, "k"), (0x1D577, "l"), (0x1D578, "m"), (0x1D579, "n"), (0x1D57A, "o"),
    (0x1D57B, "p"), (0x1D57C, "q"), (0x1D57D, "r"), (0x1D57E, "s"), (0x1D57F, "t"),
    (0x1D580, "u"), (0x1D581, "v"), (0x1D582, "w"), (0x1D583, "x"), (0x1D584, "y"),
    (0x1D585, "z"), (0x1D5A0, "a"), (0x1D5A1, "b"), (0x1D5A2, "c"), (0x1D5A3, "d"),
    (0x1D5A4, "e"), (0x1D5A5, "f"), (0x1D5A6, "g"), (0x1D5A7, "h"), (0x1D5A8, "i"),
    (0x1D5A9, "j"), (0x1D5AA, "k"), (0x1D5AB, "l"), (0x1D5AC, "m"), (0x1D5AD, "n"),
    (0x1D5AE, "o"), (0x1D5AF, "p"), (0x1D5B0, "q"), (0x1D5B1, "r"), (0x1D5B2, "s"),
    (0x1D5B3, "t"), (0x1D5B4, "u"), (0x1D5B5, "v"), (0x1D5B6, "w"), (0x1D5B7, "x"),
    (0x1D5B8, "y"), (0x1D5B9, "z"), (0x1D5D4, "a"), (0x1D5D5, "b"), (0x1D5D6, "c"),
    (0x1D5D7, "d"), (0x1D5D8, "e"), (0x1D5D9, "f"), (0x1D5DA, "g"), (0x1D5DB, "h"),
    (0x1D5DC, "i"), (0x1D5DD, "j"), (0x1D5DE, "k"), (0x1D5DF, "l"), (0x1D5E0, "m"),
    (0x1D5E1, "n"), (0x1D5E2, "o"), (0x1D5E3, "p"), (0x1D5E4, "q"), (0x1D5E5, "r"),
    (0x1D5E6, "s"), (0x1D5E7, "t"), (0x1D5E8, "u"), (0x1D5E9, "v"), (0x1D5EA, "w"),
    (0x1D5EB, "x"), (0x1D5EC, "y"), (0x1D5ED, "z"), (0x1D608, "a"), (0x1D609, "b"),
    (0x1D60A, "c"), (0x1D60B, "d"), (0x1D60C, "e"), (0x1D60D, "f"), (0x1D60E, "g"),
    (0x1D60F, "h"), (0x1D610, "i"), (0x1D611, "j"), (0x1D612, "k"), (0x1D613, "l"),
    (0x1D614, "m"), (0x1D615, "n"), (0x1D616, "o"), (0x1D617, "p"), (0x1D618, "q"),
    (0x1D619, "r"), (0x1D61A, "s"), (0x1D61B, "t"), (0x1D61C, "u"), (0x1D61D, "v"),
    (0x1D61E, "w"), (0x1D61F, "x"), (0x1D620, "y"), (0x1D621, "z"), (0x1D63C, "a"),
    (0x1D63D, "b"), (0x1D63E, "c"), (0x1D63F, "d"), (0x1D640, "e"), (0x1D641, "f"),
    (0x1D642, "g"), (0x1D643, "h"), (0x1D644, "i"), (0x1D645, "j"), (0x1D646, "k"),
    (0x1D647, "l"), (0x1D648, "m"), (0x1D649, "n"), (0x1D64A, "o"), (0x1D64B, "p"),
    (0x1D64C, "q"), (0x1D64D, "r"), (0x1D64E, "s"), (0x1D64F, "t"), (0x1D650, "u"),
    (0x1D651, "v"), (0x1D652, "w"), (0x1D653, "x"), (0x1D654, "y"), (0x1D655, "z"),
    (0x1D670, "a"), (0x1D671, "b"), (0x1D672, "c"), (0x1D673, "d"), (0x1D674, "e"),
    (0x1D675, "f"), (0x1D676, "g"), (0x1D677, "h"), (0x1D678, "i"), (0x1D679, "j"),
    (0x1D67A, "k"), (0x1D67B, "l"), (0x1D67C, "m"), (0x1D67D, "n"), (0x1D67E, "o"),
    (0x1D67F, "p"), (0x1D680, "q"), (0x1D681, "r"), (0x1D682, "s"), (0x1D683, "t"),
    (0x1D684, "u"), (0x1D685, "v"), (0x1D686, "w"), (0x1D687, "x"), (0x1D688, "y"),
    (0x1D689, "z"), (0x1D6A8, "\u{3B1}"), (0x1D6A9, "\u{3B2}"), (0x1D6AA, "\u{3B3}"),
    (0x1D6AB, "\u{3B4}"), (0x1D6AC, "\u{3B5}"), (0x1D6AD, "\u{3B6}"), (0x1D6AE, "\u{3B7}"),
    (0x1D6AF, "\u{3B8}"), (0x1D6B0, "\u{3B9}"), (0x1D6B1, "\u{3BA}"), (0x1D6B2, "\u{3BB}"),
    (0x1D6B3, "\u{3BC}"), (0x1D6B4, "\u{3BD}"), (0x1D6B5, "\u{3BE}"), (0x1D6B6, "\u{3BF}"),
    (0x1D6B7, "\u{3C0}"), (0x1D6B8, "\u{3C1}"), (0x1D6B9, "\u{3B8}"), (0x1D6BA, "\u{3C3}"),
    (0x1D6BB, "\u{3C4}"), (0x1D6BC, "\u{3C5}"), (0x1D6BD, "\u{3C6}"), (0x1D6BE, "\u{3C7}"),
    (0x1D6BF, "\u{3C8}"), (0x1D6C0, "\u{3C9}"), (0x1D6D3, "\u{3C3}"), (0x1D6E2, "\u{3B1}"),
    (0x1D6E3, "\u{3B2}"), (0x1D6E4, "\u{3B3}"), (0x1D6E5, "\u{3B4}"), (0x1D6E6, "\u{3B5}"),
    (0x1D6E7, "\u{3B6}"), (0x1D6E8, "\u{3B7}"), (0x1D6E9, "\u{3B8}"), (0x1D6EA, "\u{3B9}"),
    (0x1D6EB, "\u{3BA}"), (0x1D6EC, "\u{3BB}"), (0x1D6ED, "\u{3BC}"), (0x1D6EE, "\u{3BD}"),
    (0x1D6EF, "\u{3BE}"), (0x1D6F0, "\u{3BF}"), (0x1D6F1, "\u{3C0}"), (0x1D6F2, "\u{3C1}"),
    (0x1D6F3, "\u{3B8}"), (0x1D6F4, "\u{3C3}"), (0x1D6F5, "\u{3C4}"), (0x1D6F6, "\u{3C5}"),
    (0x1D6F7, "\u{3C6}"), (0x1D6F8, "\u{3C7}"), (0x1D6F9, "\u{3C8}"), (0x1D6FA, "\u{3C9}"),
    (0x1D70D, "\u{3C3}"), (0x1D71C, "\u{3B1}"), (0x1D71D, "\u{3B2}"), (0x1D71E, "\u{3B3}"),
    (0x1D71F, "\u{3B4}"), (0x1D720, "\u{3B5}"), (0x1D721, "\u{3B6}"), (0x1D722, "\u{3B7}"),
    (0x1D723, "\u{3B8}"), (0x1D724, "\u{3B9}"), (0x1D725, "\u{3BA}"), (0x1D726, "\u{3BB}"),
    (0x1D727, "\u{3BC}"), (0x1D728, "\u{3BD}"), (0x1D729, "\u{3BE}"), (0x1D72A, "\u{3BF}"),
    (0x1D72B, "\u{3C0}"), (0x1D72C, "\u{3C1}"), (0x1D72D, "\u{3B8}"), (0x1D72E, "\u{3C3}"),
    (0x1D72F, "\u{3C4}"), (0x1D730, "\u{3C5}"), (0x1D731, "\u{3C6}"), (0x1D732, "\u{3C7}"),
    (0x1D733, "\u{3C8}"), (0x1D734, "\u{3C9}"), (0x1D747, "\u{3C3}"), (0x1D756, "\u{3B1}"),
    (0x1D757, "\u{3B2}"), (0x1D758, "\u{3B3}"), (0x1D759, "\u{3B4}"), (0x1D75A, "\u{3B5}"),
    (0x1D75B, "\u{3B6}"), (0x1D75C, "\u{3B7}"), (0x1D75D, "\u{3B8}"), (0x1D75E, "\u{3B9}"),
    (0x1D75F, "\u{3BA}"), (0x1D760, "\u{3BB}"), (0x1D761, "\u{3BC}"), (0x1D762, "\u{3BD}"),
    (0x1D763, "\u{3BE}"), (0x1D764, "\u{3BF}"), (0x1D765, "\u{3C0}"), (0x1D766, "\u{3C1}"),
    (0x1D767, "\u{3B8}"), (0x1D768, "\u{3C3}"), (0x1D769, "\u{3C4}"), (0x1D76A, "\u{3C5}"),
    (0x1D76B, "\u{3C6}"), (0x1D76C, "\u{3C7}"), (0x1D76D, "\u{3C8}"), (0x1D76E, "\u{3C9}"),
    (0x1D781, "\u{3C3}"), (0x1D790, "\u{3B1}"), (0x1D791, "\u{3B2}"), (0x1D792, "\u{3B3}"),
    (0x1D793, "\u{3B4}"), (0x1D794, "\u{3B5}"), (0x1D795, "\u{3B6}"), (0x1D796, "\u{3B7}"),
    (0x1D797, "\u{3B8}"), (0x1D798, "\u{3B9}"), (0x1D799, "\u{3BA}"), (0x1D79A, "\u{3BB}"),
    (0x1D79B, "\u{3BC}"), (0x1D79C, "\u{3BD}"), (0x1D79D, "\u{3BE}"), (0x1D79E, "\u{3BF}"),
    (0x1D79F, "\u{3C0}"), (0x1D7A0, "\u{3C1}"), (0x1D7A1, "\u{3B8}"), (0x1D7A2, "\u{3C3}"),
    (0x1D7A3, "\u{3C4}"), (0x1D7A4, "\u{3C5}"), (0x1D7A5, "\u{3C6}"), (0x1D7A6, "\u{3C7}"),
    (0x1D7A7, "\u{3C8}"), (0x1D7A8, "\u{3C9}"), (0x1D7BB, "\u{3C3}"),
];

/// Replacement sequence for `cp` under Table B.2, if any.
pub(crate) fn fold_lookup(cp: u32) -> Option<&'static str> {
    B_2.binary_search_by_key(&cp, |&(key, _)| key)
        .ok()
        .map(|idx| B_2[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in B_2.windows(2) {
            assert!(pair[0].0 < pair[1].0, "missorted at {:#X}", pair[1].0);
        }
    }

    #[test]
    fn replacements_are_never_empty() {
        for &(key, value) in B_2 {
            let n = value.chars().count();
            assert!((1..=4).contains(&n), "U+{key:04X} maps to {n} scalars");
        }
    }

    #[test]
    fn fold_spot_checks() {
        assert_eq!(fold_lookup(0x0041), Some("a"));
        assert_eq!(fold_lookup(0x00DF), Some("ss")); // LATIN SMALL LETTER SHARP S
        assert_eq!(fold_lookup(0x00B5), Some("\u{3BC}")); // MICRO SIGN -> mu
        assert_eq!(fold_lookup(0x0130), Some("i\u{307}")); // I WITH DOT ABOVE
        assert_eq!(fold_lookup(0x2126), Some("\u{3C9}")); // OHM SIGN -> omega
        assert_eq!(fold_lookup(0x1D400), Some("a")); // MATHEMATICAL BOLD CAPITAL A
        assert_eq!(fold_lookup(0x10400), Some("\u{10428}")); // DESERET
        assert_eq!(fold_lookup(0x0061), None); // lower case folds to itself
        assert_eq!(fold_lookup(0x4F60), None);
    }
}
