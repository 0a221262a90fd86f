/// RADIUS Attribute Types as defined in RFC 2865
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AttributeType {
    /// User-Name (1)
    UserName = 1,
    /// User-Password (2)
    UserPassword = 2,
    /// CHAP-Password (3)
    ChapPassword = 3,
    /// NAS-IP-Address (4)
    NasIpAddress = 4,
    /// NAS-Port (5)
    NasPort = 5,
    /// Service-Type (6)
    ServiceType = 6,
    /// Framed-Protocol (7)
    FramedProtocol = 7,
    /// Framed-IP-Address (8)
    FramedIpAddress = 8,
    /// Framed-IP-Netmask (9)
    FramedIpNetmask = 9,
    /// Framed-Routing (10)
    FramedRouting = 10,
    /// Filter-Id (11)
    FilterId = 11,
    /// Framed-MTU (12)
    FramedMtu = 12,
    /// Framed-Compression (13)
    FramedCompression = 13,
    /// Login-IP-Host (14)
    LoginIpHost = 14,
    /// Login-Service (15)
    LoginService = 15,
    /// Login-TCP-Port (16)
    LoginTcpPort = 16,
    /// Reply-Message (18)
    ReplyMessage = 18,
    /// Callback-Number (19)
    CallbackNumber = 19,
    /// Callback-Id (20)
    CallbackId = 20,
    /// Framed-Route (22)
    FramedRoute = 22,
    /// Framed-IPX-Network (23)
    FramedIpxNetwork = 23,
    /// State (24)
    State = 24,
    /// Class (25)
    Class = 25,
    /// Vendor-Specific (26)
    VendorSpecific = 26,
    /// Session-Timeout (27)
    SessionTimeout = 27,
    /// Idle-Timeout (28)
    IdleTimeout = 28,
    /// Termination-Action (29)
    TerminationAction = 29,
    /// Called-Station-Id (30)
    CalledStationId = 30,
    /// Calling-Station-Id (31)
    CallingStationId = 31,
    /// NAS-Identifier (32)
    NasIdentifier = 32,
    /// Proxy-State (33)
    ProxyState = 33,
    /// Login-LAT-Service (34)
    LoginLatService = 34,
    /// Login-LAT-Node (35)
    LoginLatNode = 35,
    /// Login-LAT-Group (36)
    LoginLatGroup = 36,
    /// Framed-AppleTalk-Link (37)
    FramedAppleTalkLink = 37,
    /// Framed-AppleTalk-Network (38)
    FramedAppleTalkNetwork = 38,
    /// Framed-AppleTalk-Zone (39)
    FramedAppleTalkZone = 39,
    /// CHAP-Challenge (60)
    ChapChallenge = 60,
    /// NAS-Port-Type (61)
    NasPortType = 61,
    /// Port-Limit (62)
    PortLimit = 62,
    /// Login-LAT-Port (63)
    LoginLatPort = 63,
}

impl AttributeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(AttributeType::UserName),
            2 => Some(AttributeType::UserPassword),
            3 => Some(AttributeType::ChapPassword),
            4 => Some(AttributeType::NasIpAddress),
            5 => Some(AttributeType::NasPort),
            6 => Some(AttributeType::ServiceType),
            7 => Some(AttributeType::FramedProtocol),
            8 => Some(AttributeType::FramedIpAddress),
            9 => Some(AttributeType::FramedIpNetmask),
            10 => Some(AttributeType::FramedRouting),
            11 => Some(AttributeType::FilterId),
            12 => Some(AttributeType::FramedMtu),
            13 => Some(AttributeType::FramedCompression),
            14 => Some(AttributeType::LoginIpHost),
            15 => Some(AttributeType::LoginService),
            16 => Some(AttributeType::LoginTcpPort),
            18 => Some(AttributeType::ReplyMessage),
            19 => Some(AttributeType::CallbackNumber),
            20 => Some(AttributeType::CallbackId),
            22 => Some(AttributeType::FramedRoute),
            23 => Some(AttributeType::FramedIpxNetwork),
            24 => Some(AttributeType::State),
            25 => Some(AttributeType::Class),
            26 => Some(AttributeType::VendorSpecific),
            27 => Some(AttributeType::SessionTimeout),
            28 => Some(AttributeType::IdleTimeout),
            29 => Some(AttributeType::TerminationAction),
            30 => Some(AttributeType::CalledStationId),
            31 => Some(AttributeType::CallingStationId),
            32 => Some(AttributeType::NasIdentifier),
            33 => Some(AttributeType::ProxyState),
            34 => Some(AttributeType::LoginLatService),
            35 => Some(AttributeType::LoginLatNode),
            36 => Some(AttributeType::LoginLatGroup),
            37 => Some(AttributeType::FramedAppleTalkLink),
            38 => Some(AttributeType::FramedAppleTalkNetwork),
            39 => Some(AttributeType::FramedAppleTalkZone),
            60 => Some(AttributeType::ChapChallenge),
            61 => Some(AttributeType::NasPortType),
            62 => Some(AttributeType::PortLimit),
            63 => Some(AttributeType::LoginLatPort),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Dictionary name, e.g. `User-Name`
    pub fn name(self) -> &'static str {
        match self {
            AttributeType::UserName => "User-Name",
            AttributeType::UserPassword => "User-Password",
            AttributeType::ChapPassword => "CHAP-Password",
            AttributeType::NasIpAddress => "NAS-IP-Address",
            AttributeType::NasPort => "NAS-Port",
            AttributeType::ServiceType => "Service-Type",
            AttributeType::FramedProtocol => "Framed-Protocol",
            AttributeType::FramedIpAddress => "Framed-IP-Address",
            AttributeType::FramedIpNetmask => "Framed-IP-Netmask",
            AttributeType::FramedRouting => "Framed-Routing",
            AttributeType::FilterId => "Filter-Id",
            AttributeType::FramedMtu => "Framed-MTU",
            AttributeType::FramedCompression => "Framed-Compression",
            AttributeType::LoginIpHost => "Login-IP-Host",
            AttributeType::LoginService => "Login-Service",
            AttributeType::LoginTcpPort => "Login-TCP-Port",
            AttributeType::ReplyMessage => "Reply-Message",
            AttributeType::CallbackNumber => "Callback-Number",
            AttributeType::CallbackId => "Callback-Id",
            AttributeType::FramedRoute => "Framed-Route",
            AttributeType::FramedIpxNetwork => "Framed-IPX-Network",
            AttributeType::State => "State",
            AttributeType::Class => "Class",
            AttributeType::VendorSpecific => "Vendor-Specific",
            AttributeType::SessionTimeout => "Session-Timeout",
            AttributeType::IdleTimeout => "Idle-Timeout",
            AttributeType::TerminationAction => "Termination-Action",
            AttributeType::CalledStationId => "Called-Station-Id",
            AttributeType::CallingStationId => "Calling-Station-Id",
            AttributeType::NasIdentifier => "NAS-Identifier",
            AttributeType::ProxyState => "Proxy-State",
            AttributeType::LoginLatService => "Login-LAT-Service",
            AttributeType::LoginLatNode => "Login-LAT-Node",
            AttributeType::LoginLatGroup => "Login-LAT-Group",
            AttributeType::FramedAppleTalkLink => "Framed-AppleTalk-Link",
            AttributeType::FramedAppleTalkNetwork => "Framed-AppleTalk-Network",
            AttributeType::FramedAppleTalkZone => "Framed-AppleTalk-Zone",
            AttributeType::ChapChallenge => "CHAP-Challenge",
            AttributeType::NasPortType => "NAS-Port-Type",
            AttributeType::PortLimit => "Port-Limit",
            AttributeType::LoginLatPort => "Login-LAT-Port",
        }
    }
}

impl From<AttributeType> for u8 {
    fn from(value: AttributeType) -> Self {
        value.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_constants() {
        assert_eq!(AttributeType::UserName.as_u8(), 1);
        assert_eq!(AttributeType::UserPassword.as_u8(), 2);
        assert_eq!(AttributeType::CalledStationId.as_u8(), 30);
        assert_eq!(AttributeType::CallingStationId.as_u8(), 31);
    }

    #[test]
    fn test_from_u8_round_trips() {
        for code in 0..=u8::MAX {
            if let Some(attr) = AttributeType::from_u8(code) {
                assert_eq!(attr.as_u8(), code);
            }
        }
        assert_eq!(AttributeType::from_u8(17), None);
        assert_eq!(AttributeType::from_u8(200), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(AttributeType::CallingStationId.name(), "Calling-Station-Id");
        assert_eq!(AttributeType::ReplyMessage.name(), "Reply-Message");
    }
}
